pub mod html;

pub use html::HtmlReportFormatter;
