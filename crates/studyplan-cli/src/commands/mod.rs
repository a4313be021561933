pub mod config;
pub mod convert;
pub mod delete;
pub mod generate;
pub mod history;
pub mod list;
pub mod misc;
pub mod show;

pub use config::handle_config;
pub use convert::handle_convert;
pub use delete::handle_delete;
pub use generate::handle_generate;
pub use history::handle_history;
pub use list::handle_list;
pub use misc::handle_completions;
pub use show::handle_show;
