use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use sh_core::control::DataControlPackage;
use sh_core::data::DataPackage;
use sh_core::ports::{CaptureError, DataPackageFactoryPort, MainThreadInvokerPort};

use crate::concurrency::invoke_on_main_thread;
use crate::controls::ControlFactoryRegistry;

/// Use case pairing a clipboard capture with its control.
/// 将剪贴板捕获与其控件配对的用例。
///
/// Control construction always happens on the main thread; the calling task
/// is suspended until it has finished.
/// 控件构建始终在主线程上执行，调用方会一直等待直到构建完成。
pub struct DataControlPackageFactory {
    data_package_factory: Arc<dyn DataPackageFactoryPort>,
    control_factories: Arc<ControlFactoryRegistry>,
    main_thread: Arc<dyn MainThreadInvokerPort>,
}

impl DataControlPackageFactory {
    pub fn new(
        data_package_factory: Arc<dyn DataPackageFactoryPort>,
        control_factories: Arc<ControlFactoryRegistry>,
        main_thread: Arc<dyn MainThreadInvokerPort>,
    ) -> Self {
        Self {
            data_package_factory,
            control_factories,
            main_thread,
        }
    }

    /// Captures the current clipboard and builds its control.
    ///
    /// Returns `Ok(None)` when the clipboard content could not be
    /// classified. Any other capture failure is returned as an error.
    #[tracing::instrument(name = "usecase.data_control_package.from_clipboard", skip(self))]
    pub async fn create_from_current_clipboard(&self) -> Result<Option<DataControlPackage>> {
        let package = match self.data_package_factory.create_from_current_clipboard().await {
            Ok(package) => package,
            Err(CaptureError::FormatNotUnderstood) => {
                info!("Clipboard format not understood, no control built");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        self.create_from_data_package(package).await.map(Some)
    }

    /// Builds the control for an already captured package.
    ///
    /// The package is kept even when no factory recognises it.
    #[tracing::instrument(
        name = "usecase.data_control_package.from_package",
        skip(self, package)
    )]
    pub async fn create_from_data_package(
        &self,
        package: impl Into<Arc<DataPackage>>,
    ) -> Result<DataControlPackage> {
        let package = package.into();
        debug!(items = package.len(), "Building control on main thread");

        let registry = Arc::clone(&self.control_factories);
        let target = Arc::clone(&package);
        let control = invoke_on_main_thread(self.main_thread.as_ref(), move || {
            registry.build_control(&target)
        })
        .await??;

        match &control {
            Some(control) => info!(control = control.name(), "Control built"),
            None => info!("No control factory accepted the package"),
        }

        Ok(DataControlPackage::new(package, control))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use sh_core::control::{ControlFactory, ControlModel};
    use sh_core::data::DataItem;
    use sh_core::ports::MainThreadJob;
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        Capture {}

        #[async_trait]
        impl DataPackageFactoryPort for Capture {
            async fn create_from_current_clipboard(&self) -> Result<DataPackage, CaptureError>;
        }
    }

    /// Runs jobs inline and counts them.
    #[derive(Default)]
    struct CountingInvoker {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MainThreadInvokerPort for CountingInvoker {
        async fn invoke(&self, job: MainThreadJob) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            job();
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Marker;

    impl ControlModel for Marker {
        fn name(&self) -> &'static str {
            "marker"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct TextOnly;

    impl ControlFactory for TextOnly {
        fn priority(&self) -> i32 {
            0
        }

        fn can_build_control(&self, package: &DataPackage) -> bool {
            package
                .items()
                .iter()
                .any(|item| matches!(item, DataItem::Text(_)))
        }

        fn build_control(&self, _package: &DataPackage) -> Result<Box<dyn ControlModel>> {
            Ok(Box::new(Marker))
        }
    }

    fn use_case(capture: MockCapture, invoker: Arc<CountingInvoker>) -> DataControlPackageFactory {
        let factories: Vec<Arc<dyn ControlFactory>> = vec![Arc::new(TextOnly)];
        DataControlPackageFactory::new(
            Arc::new(capture),
            Arc::new(ControlFactoryRegistry::new(factories)),
            invoker,
        )
    }

    #[tokio::test]
    async fn unclassifiable_clipboard_yields_none() {
        let mut capture = MockCapture::new();
        capture
            .expect_create_from_current_clipboard()
            .times(1)
            .returning(|| Err(CaptureError::FormatNotUnderstood));
        let invoker = Arc::new(CountingInvoker::default());

        let result = use_case(capture, invoker.clone())
            .create_from_current_clipboard()
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(invoker.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn platform_failure_is_propagated() {
        let mut capture = MockCapture::new();
        capture
            .expect_create_from_current_clipboard()
            .returning(|| Err(CaptureError::Platform(anyhow::anyhow!("clipboard busy"))));

        let result = use_case(capture, Arc::new(CountingInvoker::default()))
            .create_from_current_clipboard()
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn builds_control_through_main_thread() {
        let mut capture = MockCapture::new();
        capture
            .expect_create_from_current_clipboard()
            .returning(|| Ok(DataPackage::new(vec![DataItem::text("hi")])));
        let invoker = Arc::new(CountingInvoker::default());

        let built = use_case(capture, invoker.clone())
            .create_from_current_clipboard()
            .await
            .unwrap()
            .expect("package should be built");

        assert_eq!(built.control().map(|c| c.name()), Some("marker"));
        assert_eq!(built.package().len(), 1);
        assert_eq!(invoker.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unmatched_package_keeps_package_without_control() {
        let invoker = Arc::new(CountingInvoker::default());
        let package = DataPackage::new(vec![DataItem::from(sh_core::data::FileData::new(
            "/tmp/a.txt",
            false,
        ))]);

        let built = use_case(MockCapture::new(), invoker)
            .create_from_data_package(package)
            .await
            .unwrap();

        assert!(!built.has_control());
        assert_eq!(built.package().len(), 1);
    }
}
