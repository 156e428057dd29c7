mod navigation;
mod page;
mod palette;
mod records;

pub use navigation::{resolve_navigation, NavEntry};
pub use page::{
    AboutView, ContactView, FooterView, HeroView, LogoView, MaintenanceView, PageView,
    PreloaderView, SeoView, SiteContent, SiteView, StatView, ThemeView, DEFAULT_BADGES,
};
pub use palette::{hex_to_hsl, DEFAULT_PRIMARY_HSL};
pub use records::{ExperienceView, Presentable, ProjectView, SkillGroupView, SkillView};
