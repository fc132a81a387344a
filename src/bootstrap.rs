//! Startup sequence: load registries, register slash commands, log in

use std::sync::Arc;

use crate::application::context::AppContext;
use crate::application::errors::BotError;
use crate::domain::traits::{CommandRegistrar, Gateway};
use crate::infrastructure::config::Config;
use crate::infrastructure::plugins::{PluginLoader, RegistrationTable};

pub struct Bootstrap {
    config: Config,
    table: RegistrationTable,
}

impl Bootstrap {
    pub fn new(config: Config, table: RegistrationTable) -> Self {
        Self { config, table }
    }

    /// Populates the registries in order: commands, events, slash commands
    pub fn load(self) -> AppContext {
        let loader = PluginLoader::new(&self.table);
        let commands = loader.load_commands();
        let events = loader.load_events();
        let slash_commands = loader.load_slash_commands();

        tracing::info!(
            "Loaded {} commands ({} aliases), {} events, {} slash commands",
            commands.len(),
            commands.alias_count(),
            events.len(),
            slash_commands.len()
        );

        AppContext::new(self.config, commands, events, slash_commands)
    }

    /// Loads everything, registers slash commands and logs in.
    ///
    /// A missing client id is fatal and returned before any remote call.
    /// A failed registration is logged and login still proceeds.
    pub async fn run<R, G>(self, registrar: &R, gateway: &mut G) -> Result<(), BotError>
    where
        R: CommandRegistrar + ?Sized,
        G: Gateway + ?Sized,
    {
        let app = self.load();

        let client_id = app.config().client_id().map_err(|e| {
            tracing::error!("Couldn't find the client ID in the config file");
            e
        })?;

        let batch = app.slash_commands().payloads();
        match registrar.register(client_id, &batch).await {
            Ok(()) => tracing::info!("Successfully registered {} application commands.", batch.len()),
            Err(e) => tracing::error!("Couldn't register application commands: {}", e),
        }

        gateway.login(Arc::new(app)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::application::errors::ConfigError;
    use crate::application::testing::CountingHandler;
    use crate::domain::entities::{RegistrationPayload, SlashCommandDescriptor};
    use crate::infrastructure::plugins::Registration;

    struct FailingRegistrar {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CommandRegistrar for FailingRegistrar {
        async fn register(&self, _client_id: &str, _batch: &[RegistrationPayload]) -> Result<(), BotError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(BotError::Network("connection reset by peer".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingRegistrar {
        batches: Mutex<Vec<(String, Vec<String>)>>,
    }

    #[async_trait]
    impl CommandRegistrar for RecordingRegistrar {
        async fn register(&self, client_id: &str, batch: &[RegistrationPayload]) -> Result<(), BotError> {
            let names = batch.iter().map(|p| p.name.clone()).collect();
            self.batches.lock().unwrap().push((client_id.to_string(), names));
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeGateway {
        logins: usize,
        slash_count: usize,
    }

    #[async_trait]
    impl Gateway for FakeGateway {
        async fn login(&mut self, app: Arc<AppContext>) -> Result<(), BotError> {
            self.logins += 1;
            self.slash_count = app.slash_commands().len();
            Ok(())
        }
    }

    fn ping() -> Result<SlashCommandDescriptor, BotError> {
        Ok(SlashCommandDescriptor::new("ping", CountingHandler::default()).with_description("pong"))
    }

    fn table() -> RegistrationTable {
        RegistrationTable {
            slash_commands: vec![Registration::new("src/modules/slash/utility/ping.rs", ping)],
            ..Default::default()
        }
    }

    fn config(client_id: Option<&str>) -> Config {
        let mut config = Config::default();
        config.discord.client_id = client_id.map(str::to_string);
        config
    }

    #[tokio::test]
    async fn test_registration_failure_does_not_block_login() {
        let registrar = FailingRegistrar { calls: AtomicUsize::new(0) };
        let mut gateway = FakeGateway::default();

        let result = Bootstrap::new(config(Some("123")), table())
            .run(&registrar, &mut gateway)
            .await;

        assert!(result.is_ok());
        assert_eq!(registrar.calls.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.logins, 1);
        assert_eq!(gateway.slash_count, 1);
    }

    #[tokio::test]
    async fn test_missing_client_id_aborts_before_registration_and_login() {
        let registrar = RecordingRegistrar::default();
        let mut gateway = FakeGateway::default();

        let result = Bootstrap::new(config(None), table())
            .run(&registrar, &mut gateway)
            .await;

        assert!(matches!(result, Err(BotError::Config(ConfigError::MissingField(_)))));
        assert!(registrar.batches.lock().unwrap().is_empty());
        assert_eq!(gateway.logins, 0);
    }

    #[tokio::test]
    async fn test_batch_is_scoped_to_client_id() {
        let registrar = RecordingRegistrar::default();
        let mut gateway = FakeGateway::default();

        Bootstrap::new(config(Some("987")), table())
            .run(&registrar, &mut gateway)
            .await
            .unwrap();

        assert_eq!(
            *registrar.batches.lock().unwrap(),
            vec![("987".to_string(), vec!["ping".to_string()])]
        );
    }
}
