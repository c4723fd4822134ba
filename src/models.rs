use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 页面标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Research,
    Photography,
    Contact,
}

impl Tab {
    /// 导航栏中的顺序
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Research, Tab::Photography, Tab::Contact];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Research => "Research",
            Tab::Photography => "Photography",
            Tab::Contact => "Contact",
        }
    }

    /// 窄屏时的缩写
    pub fn short_label(self) -> &'static str {
        match self {
            Tab::Home => "H",
            Tab::Research => "R",
            Tab::Photography => "P",
            Tab::Contact => "C",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Research => 1,
            Tab::Photography => 2,
            Tab::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// 下一个标签（循环）
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// 上一个标签（循环）
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// 个人资料
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub affiliation: &'static str,
}

impl Profile {
    /// 邮件链接目标
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// 研究概要
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchSummary {
    pub title: &'static str,
    pub abstract_text: &'static str,
    pub skills: &'static [&'static str],
    pub key_finding: &'static str,
}

/// 摄影作品
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accent {
    Primary,
    Secondary,
}

/// 首页卡片
#[derive(Debug, Clone, PartialEq)]
pub struct FocusArea {
    pub title: &'static str,
    pub blurb: &'static str,
    pub accent: Accent,
}

/// 首页标语（两行）
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub lead: &'static str,
    pub emphasis: &'static str,
}

/// 全部静态内容
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub headline: Headline,
    pub research: ResearchSummary,
    pub photos: &'static [Photo],
    pub focus_areas: &'static [FocusArea],
}

impl Portfolio {
    pub fn builtin() -> &'static Portfolio {
        &PORTFOLIO
    }
}

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Perpetual Tetteh",
        title: "Conservation Biologist & Entomologist",
        bio: "Passionate researcher focused on sustainable pest management and vector control. \
              My work explores the intersection of botanical chemical ecology and public health, \
              with a specific focus on natural alternatives to synthetic insecticides.",
        email: "perpetual.tetteh@example.com",
        affiliation: "University of Cape Coast, Ghana",
    },
    headline: Headline {
        lead: "Nature’s Chemistry,",
        emphasis: "Redefined.",
    },
    research: ResearchSummary {
        title: "Behavioural Response of Aedes aegypti to Odours from Three Plant Materials",
        abstract_text: "Investigated the repellent efficacy of Chromolaena odorata, Synedrella nodiflora, \
                        and Cymbopogon citratus against Aedes aegypti using Y-tube olfactometry. \
                        My findings identified Synedrella nodiflora as a high-potential candidate \
                        for botanical repellent development.",
        skills: &[
            "Olfactometry",
            "Insect Rearing",
            "Bioassay Design",
            "Statistical Analysis (SPSS/R)",
            "Field Identification",
        ],
        key_finding: "My investigation identified that Cymbopogon citratus induces a 100% repellent \
                      response in female Aedes aegypti, suggesting its immense potential for \
                      commercial organic repellents.",
    },
    photos: &[
        Photo {
            id: 1,
            title: "Lab Setup",
            category: "Research",
            url: "https://images.unsplash.com/photo-1581093588401-fbb62a02f120?auto=format&fit=crop&w=800&q=80",
        },
        Photo {
            id: 2,
            title: "Fieldwork",
            category: "Conservation",
            url: "https://images.unsplash.com/photo-1500382017468-9049fed747ef?auto=format&fit=crop&w=800&q=80",
        },
        Photo {
            id: 3,
            title: "Vector Study",
            category: "Entomology",
            url: "https://images.unsplash.com/photo-1576086213369-97a306d36557?auto=format&fit=crop&w=800&q=80",
        },
    ],
    focus_areas: &[
        FocusArea {
            title: "Olfactometry",
            blurb: "Specialized in bioassay design to decode how vectors interact with botanical volatiles.",
            accent: Accent::Primary,
        },
        FocusArea {
            title: "Sustainability",
            blurb: "Advocating for biopesticides as a safer, ecological alternative to synthetic chemistry.",
            accent: Accent::Secondary,
        },
        FocusArea {
            title: "Conservation",
            blurb: "Documenting the rich biodiversity of Ghana through a lens of scientific preservation.",
            accent: Accent::Primary,
        },
    ],
};
