use std::pin::Pin;

use color_eyre::{Result, eyre::eyre};
use log::debug;

use crate::image_model::{Image, ImageModel, Model};

pub mod dalle_api;

#[derive(Clone)]
pub struct DallE {
    model: Model,
    api_key: String,
    client: reqwest::Client,
}

impl DallE {
    pub fn new(model: Model, api_key: String) -> Self {
        Self {
            model,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

impl ImageModel for DallE {
    fn get_image<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Image>> + Send + 'a>> {
        Box::pin(async move {
            let response =
                dalle_api::generate(prompt, self.model, &self.api_key, &self.client).await?;
            debug!("Generation response: {response:#?}");

            let url = response
                .image_url()
                .ok_or_else(|| eyre!("No image URL in response:\n{response:#?}"))?;

            let data = dalle_api::fetch_image(url, &self.client).await?;
            let revised_prompt = response.data.first().and_then(|d| d.revised_prompt.clone());

            Ok(Image {
                data,
                revised_prompt,
            })
        })
    }
}
