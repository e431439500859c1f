pub mod card;
pub mod error;
pub mod forms;

pub use card::property_card;
pub use error::html_error_response;
pub use forms::add_property_form;
