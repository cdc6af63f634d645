// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod empty_state;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod search_bar;
pub mod skeleton;
pub mod tab_bar;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod avatar;
pub mod dialog;
pub mod dropdown_menu;
pub mod toast;

pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use empty_state::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use search_bar::*;
pub use skeleton::*;
pub use tab_bar::*;
pub use textarea::*;
pub use toast::*;
