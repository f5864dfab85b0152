use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5::{Config as T5Config, T5ForConditionalGeneration};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;

use crate::error::{QaError, Result};
use crate::settings::ModelSettings;

/// Produces a single text completion for a prompt.
///
/// Implementations are called from the blocking thread pool and must not
/// mutate shared state.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Sequence-to-sequence generation with a T5 checkpoint from the Hugging Face hub.
pub struct T5Generator {
    model: T5ForConditionalGeneration,
    tokenizer: Tokenizer,
    config: T5Config,
    device: Device,
    max_new_tokens: usize,
}

impl T5Generator {
    pub fn load(settings: &ModelSettings) -> Result<Self> {
        let device = Device::Cpu;

        log::info!(
            "Loading {} (revision {}) on {:?}",
            settings.model_id,
            settings.revision,
            device
        );

        let api = Api::new().map_err(|e| QaError::ModelLoad(e.to_string()))?;
        let repo = api.repo(Repo::with_revision(
            settings.model_id.clone(),
            RepoType::Model,
            settings.revision.clone(),
        ));

        let config_path = repo
            .get("config.json")
            .map_err(|e| QaError::ModelLoad(format!("config.json: {}", e)))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .map_err(|e| QaError::ModelLoad(format!("tokenizer.json: {}", e)))?;
        let weights_path = repo
            .get("model.safetensors")
            .map_err(|e| QaError::ModelLoad(format!("model.safetensors: {}", e)))?;

        let config_contents = std::fs::read_to_string(&config_path)
            .map_err(|e| QaError::ModelLoad(format!("read config: {}", e)))?;
        let config: T5Config = serde_json::from_str(&config_contents)
            .map_err(|e| QaError::ModelLoad(format!("parse config: {}", e)))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| QaError::ModelLoad(format!("tokenizer: {}", e)))?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)
                .map_err(|e| QaError::ModelLoad(format!("weights: {}", e)))?
        };

        let model = T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| QaError::ModelLoad(format!("model: {}", e)))?;

        log::info!("Model {} loaded", settings.model_id);

        Ok(Self {
            model,
            tokenizer,
            config,
            device,
            max_new_tokens: settings.max_new_tokens,
        })
    }

    fn decoder_start_token(&self) -> u32 {
        self.config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32
    }
}

impl TextGenerator for T5Generator {
    fn generate(&self, prompt: &str) -> Result<String> {
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| QaError::Generation(format!("tokenization: {}", e)))?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(generation_error)?;

        // Weights are shared with the handle; the key/value cache is ours alone.
        let mut model = self.model.clone();
        model.clear_kv_cache();

        let encoder_output = model.encode(&input_ids).map_err(generation_error)?;

        let mut output_ids = vec![self.decoder_start_token()];

        while output_ids.len() < self.max_new_tokens {
            let decoder_ids = if output_ids.len() == 1 || !self.config.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)
            } else {
                Tensor::new(&output_ids[output_ids.len() - 1..], &self.device)
            }
            .and_then(|t| t.unsqueeze(0))
            .map_err(generation_error)?;

            let logits = model
                .decode(&decoder_ids, &encoder_output)
                .and_then(|t| t.squeeze(0))
                .map_err(|e| QaError::Generation(format!("decoder: {}", e)))?;

            let next_token = logits
                .argmax(0)
                .and_then(|t| t.to_scalar::<u32>())
                .map_err(generation_error)?;

            if next_token as usize == self.config.eos_token_id {
                break;
            }
            output_ids.push(next_token);
        }

        log::debug!(
            "Generated {} tokens from a {}-token prompt",
            output_ids.len() - 1,
            encoding.get_ids().len()
        );

        self.tokenizer
            .decode(&output_ids, true)
            .map_err(|e| QaError::Generation(format!("detokenization: {}", e)))
    }
}

fn generation_error(e: candle_core::Error) -> QaError {
    QaError::Generation(e.to_string())
}
