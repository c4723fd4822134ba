//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::Tab;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,

    // 标签切换
    SelectTab(Tab),
    NextTab,
    PrevTab,

    // 滚动（首页、研究页）
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // 首页按钮
    ExploreResearch,
    OpenCurriculumVitae,

    // 摄影页
    SelectPhotoPrev,
    SelectPhotoNext,

    // 联系页
    ShowEmailLink,
}
