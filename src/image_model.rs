use std::pin::Pin;

use color_eyre::Result;
use strum::Display;

pub mod dalle;
pub use dalle::DallE;

use crate::ImgModBox;

#[derive(Debug, Clone, Copy, Display, clap::ValueEnum, PartialEq, Eq, Default)]
pub enum Model {
    #[strum(to_string = "dall-e-2")]
    #[value(name = "dall-e-2")]
    DallE2,

    #[default]
    #[strum(to_string = "dall-e-3")]
    #[value(name = "dall-e-3")]
    DallE3,
}

impl Model {
    pub fn make(&self, key: String) -> ImgModBox {
        Box::new(DallE::new(*self, key))
    }
}

pub struct Image {
    pub data: Vec<u8>,
    /// dall-e-3 rewrites prompts before generation and reports the rewrite
    pub revised_prompt: Option<String>,
}

pub trait ImageModel {
    fn get_image<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Image>> + Send + 'a>>;
}
