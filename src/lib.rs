use crate::image_model::ImageModel;

pub mod batch;
pub mod cli;
pub mod config;
pub mod image_model;
pub mod prompts;

pub type ImgModBox = Box<dyn ImageModel + Send>;
