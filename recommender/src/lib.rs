pub mod presenter;
pub mod tier;
pub mod view;

pub use presenter::{Liveness, Presenter, ViewState, LOAD_ERROR};
pub use tier::{tier, Tier};
pub use view::{EmptyState, MatchCard, PageView, SkillGapCard, Tab, TabBody, TabLabel};
