mod headless;

pub use headless::HeadlessApp;
