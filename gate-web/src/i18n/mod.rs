mod bundle;
mod locales;
mod page;
mod render;

pub use bundle::{current_lang, set_lang, switch_language};
pub use locales::embedded_tables;
pub use page::{LANGUAGE_CHANGED_EVENT, apply_translations};
pub use render::{t, t_or, text_for, tr};
