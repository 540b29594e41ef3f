use crate::ai::AiClient;
use crate::config::GeneratorConfig;
use crate::generator;
use crate::logger::Logger;
use crate::themes::THEMES;
use crate::{log_info, log_warning};
use rand::rngs::{SmallRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::error::Error;

pub struct App {
    pub config: GeneratorConfig,
    pub logger: Logger,
    rng: SmallRng,
    ai: Option<AiClient>,
}

impl App {
    pub fn new(config: GeneratorConfig) -> Result<Self, Box<dyn Error>> {
        let logger = Logger::new(config.quiet);

        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::seed_from_u64(ThreadRng::default().random()),
        };

        let ai = if config.ai.enabled {
            Some(AiClient::new(config.ai.clone())?)
        } else {
            None
        };

        Ok(App {
            config,
            logger,
            rng,
            ai,
        })
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let theme_names: Vec<&str> = self
            .config
            .themes
            .iter()
            .filter_map(|t| THEMES.get(t).map(|data| data.name))
            .collect();
        if theme_names.is_empty() {
            log_info!(
                self.logger,
                "Generating {} username(s) from the generic word pools",
                self.config.count
            );
        } else {
            log_info!(
                self.logger,
                "Generating {} username(s) for: {}",
                self.config.count,
                theme_names.join(", ")
            );
        }

        let mut produced: Vec<String> = Vec::with_capacity(self.config.count);
        for _ in 0..self.config.count {
            let name = self.next_name(&produced).await;
            println!("{}", name);
            produced.push(name);
        }
        Ok(())
    }

    // AI first when enabled, local engine on any failure. The local path
    // is total, so this always yields a name.
    async fn next_name(&mut self, produced: &[String]) -> String {
        if let Some(ai) = self.ai.as_mut() {
            match ai
                .generate(&mut self.rng, &self.config.themes, produced)
                .await
            {
                Ok(name) => return name,
                Err(e) => {
                    log_warning!(
                        self.logger,
                        "AI generation failed ({}), falling back to local engine",
                        e
                    );
                }
            }
        }
        generator::generate(&mut self.rng, &self.config.themes)
    }
}
