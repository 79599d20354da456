use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info};

use shopdesk_domain::drive::{DriveFile, PickerBackend, PickerOutcome};
use shopdesk_domain::DomainError;
use shopdesk_infrastructure::config::TimeoutConfig;

pub const AUTH_CANCELLED_MESSAGE: &str =
    "Se canceló la autenticación. Por favor, inténtalo de nuevo.";
pub const LOAD_TIMEOUT_MESSAGE: &str =
    "Las APIs de Google tardaron demasiado en cargar. Por favor, recarga la página.";
pub const PICKER_FAILED_MESSAGE: &str = "Error al abrir el selector de archivos";

/// Multi-select image picking through the Drive picker.
///
/// The picker library is requested once and polled until ready. The access
/// token is cached after the first consent.
pub struct DrivePickerService {
    backend: Arc<dyn PickerBackend>,
    poll_interval: Duration,
    load_timeout: Duration,
    library_requested: AtomicBool,
    access_token: Mutex<Option<String>>,
}

impl DrivePickerService {
    pub fn new(backend: Arc<dyn PickerBackend>, timeouts: &TimeoutConfig) -> Self {
        Self {
            backend,
            poll_interval: timeouts.picker_poll,
            load_timeout: timeouts.picker_load_timeout,
            library_requested: AtomicBool::new(false),
            access_token: Mutex::new(None),
        }
    }

    /// Files the user picked. Closing the picker yields an empty list.
    pub async fn select_multiple_images(&self) -> Result<Vec<DriveFile>, DomainError> {
        self.wait_until_ready().await?;
        let token = self.authenticate().await?;

        match self.backend.open_picker(&token).await {
            Ok(PickerOutcome::Picked(files)) => {
                info!(count = files.len(), "Drive files picked");
                Ok(files)
            }
            Ok(PickerOutcome::Cancelled) => {
                debug!("Drive picker closed without a selection");
                Ok(Vec::new())
            }
            Err(err) => {
                error!(error = %err, "Failed to open Drive picker");
                Err(DomainError::Infrastructure(PICKER_FAILED_MESSAGE.to_string()))
            }
        }
    }

    /// Load the library on first use and wait for it, all under one deadline.
    async fn wait_until_ready(&self) -> Result<(), DomainError> {
        let ready = async {
            if !self.library_requested.swap(true, Ordering::SeqCst) {
                // A failed load only shows up as the readiness wait timing out.
                if let Err(err) = self.backend.load_library().await {
                    error!(error = %err, "Failed to load Drive picker library");
                }
            }

            while !self.backend.is_ready() {
                sleep(self.poll_interval).await;
            }
        };

        timeout(self.load_timeout, ready).await.map_err(|_| {
            error!(
                timeout_ms = self.load_timeout.as_millis() as u64,
                "Drive picker never became ready"
            );
            DomainError::Timeout(LOAD_TIMEOUT_MESSAGE.to_string())
        })
    }

    async fn authenticate(&self) -> Result<String, DomainError> {
        if let Some(token) = self.cached_token() {
            return Ok(token);
        }

        let token = self
            .backend
            .request_access_token()
            .await
            .map_err(|err| match err {
                DomainError::Cancelled(_) => {
                    info!("Drive authentication cancelled by the user");
                    DomainError::Cancelled(AUTH_CANCELLED_MESSAGE.to_string())
                }
                other => other,
            })?;

        if let Ok(mut cached) = self.access_token.lock() {
            *cached = Some(token.clone());
        }
        Ok(token)
    }

    fn cached_token(&self) -> Option<String> {
        self.access_token.lock().ok().and_then(|t| t.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_domain::mock::MockPicker;
    use std::sync::atomic::AtomicUsize;

    fn file(id: &str) -> DriveFile {
        DriveFile {
            id: id.to_string(),
            name: format!("{id}.jpg"),
            url: format!("https://drive.google.com/file/d/{id}/view"),
            mime_type: "image/jpeg".to_string(),
        }
    }

    fn service(backend: MockPicker) -> DrivePickerService {
        DrivePickerService::new(Arc::new(backend), &TimeoutConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_library_then_picks() {
        let polls = Arc::new(AtomicUsize::new(0));
        let counter = polls.clone();

        let mut backend = MockPicker::new();
        backend.expect_load_library().times(1).returning(|| Ok(()));
        backend
            .expect_is_ready()
            .returning(move || counter.fetch_add(1, Ordering::SeqCst) >= 3);
        backend
            .expect_request_access_token()
            .times(1)
            .returning(|| Ok("ya29.token".to_string()));
        backend
            .expect_open_picker()
            .withf(|token| token == "ya29.token")
            .times(2)
            .returning(|_| Ok(PickerOutcome::Picked(vec![file("a"), file("b")])));

        let service = service(backend);

        let files = service.select_multiple_images().await.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(polls.load(Ordering::SeqCst), 4);

        // library and token are reused
        let files = service.select_multiple_images().await.unwrap();
        assert_eq!(files[1].id, "b");
    }

    #[tokio::test(start_paused = true)]
    async fn test_library_never_ready_times_out() {
        let mut backend = MockPicker::new();
        backend
            .expect_load_library()
            .returning(|| Err(DomainError::Network("script blocked".to_string())));
        backend.expect_is_ready().returning(|| false);
        backend.expect_request_access_token().never();

        let started = tokio::time::Instant::now();
        let err = service(backend).select_multiple_images().await.unwrap_err();

        assert!(started.elapsed() >= Duration::from_secs(10));
        assert!(matches!(err, DomainError::Timeout(_)));
        assert_eq!(err.message(), LOAD_TIMEOUT_MESSAGE);
    }

    /// Library whose script request never settles.
    struct StalledLibrary;

    #[async_trait::async_trait]
    impl PickerBackend for StalledLibrary {
        async fn load_library(&self) -> Result<(), DomainError> {
            std::future::pending().await
        }

        fn is_ready(&self) -> bool {
            false
        }

        async fn request_access_token(&self) -> Result<String, DomainError> {
            Ok("t".to_string())
        }

        async fn open_picker(&self, _access_token: &str) -> Result<PickerOutcome, DomainError> {
            Ok(PickerOutcome::Cancelled)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_library_load_times_out() {
        let service = DrivePickerService::new(Arc::new(StalledLibrary), &TimeoutConfig::default());

        let started = tokio::time::Instant::now();
        let result = timeout(
            Duration::from_secs(60),
            service.select_multiple_images(),
        )
        .await
        .expect("picker wait must end on its own deadline");

        let err = result.unwrap_err();
        assert!(matches!(err, DomainError::Timeout(_)));
        assert_eq!(err.message(), LOAD_TIMEOUT_MESSAGE);
        assert!(started.elapsed() >= Duration::from_secs(10));
        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_closed_consent_popup() {
        let mut backend = MockPicker::new();
        backend.expect_load_library().returning(|| Ok(()));
        backend.expect_is_ready().returning(|| true);
        backend
            .expect_request_access_token()
            .returning(|| Err(DomainError::Cancelled("popup closed".to_string())));
        backend.expect_open_picker().never();

        let err = service(backend).select_multiple_images().await.unwrap_err();

        assert!(matches!(err, DomainError::Cancelled(_)));
        assert_eq!(err.message(), AUTH_CANCELLED_MESSAGE);
    }

    #[tokio::test]
    async fn test_cancelled_picker_is_empty() {
        let mut backend = MockPicker::new();
        backend.expect_load_library().returning(|| Ok(()));
        backend.expect_is_ready().returning(|| true);
        backend
            .expect_request_access_token()
            .returning(|| Ok("t".to_string()));
        backend
            .expect_open_picker()
            .returning(|_| Ok(PickerOutcome::Cancelled));

        let files = service(backend).select_multiple_images().await.unwrap();

        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_picker_failure_has_user_message() {
        let mut backend = MockPicker::new();
        backend.expect_load_library().returning(|| Ok(()));
        backend.expect_is_ready().returning(|| true);
        backend
            .expect_request_access_token()
            .returning(|| Ok("t".to_string()));
        backend
            .expect_open_picker()
            .returning(|_| Err(DomainError::Infrastructure("builder threw".to_string())));

        let err = service(backend).select_multiple_images().await.unwrap_err();

        assert_eq!(err.message(), PICKER_FAILED_MESSAGE);
    }
}
