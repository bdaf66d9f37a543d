use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use sh_app::controls::{ControlFactoryRegistry, FileListControl, TextControl};
use sh_app::DataControlPackageFactory;
use sh_core::control::{ControlFactory, ControlModel};
use sh_core::data::{DataItem, DataPackage, FileData};
use sh_core::ports::{CaptureError, DataPackageFactoryPort};
use sh_infra::runtime::MainThreadDispatcher;

struct FixedCapture(Mutex<Option<Result<DataPackage, CaptureError>>>);

impl FixedCapture {
    fn new(result: Result<DataPackage, CaptureError>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(Some(result))))
    }
}

#[async_trait]
impl DataPackageFactoryPort for FixedCapture {
    async fn create_from_current_clipboard(&self) -> Result<DataPackage, CaptureError> {
        self.0
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(CaptureError::FormatNotUnderstood))
    }
}

/// Records the name of the thread it was built on.
struct ThreadRecorder(Arc<Mutex<Option<String>>>);

#[derive(Debug)]
struct Recorded;

impl ControlModel for Recorded {
    fn name(&self) -> &'static str {
        "recorded"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ControlFactory for ThreadRecorder {
    fn priority(&self) -> i32 {
        0
    }

    fn can_build_control(&self, _package: &DataPackage) -> bool {
        true
    }

    fn build_control(&self, _package: &DataPackage) -> anyhow::Result<Box<dyn ControlModel>> {
        *self.0.lock().unwrap() = std::thread::current().name().map(str::to_string);
        Ok(Box::new(Recorded))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn control_is_built_on_designated_thread() {
    let (invoker, main_loop) = MainThreadDispatcher::channel(4);
    let handle = main_loop.spawn("ui-thread").unwrap();

    let seen = Arc::new(Mutex::new(None));
    let factories: Vec<Arc<dyn ControlFactory>> = vec![Arc::new(ThreadRecorder(seen.clone()))];
    let use_case = DataControlPackageFactory::new(
        FixedCapture::new(Ok(DataPackage::new(vec![DataItem::text("x")]))),
        Arc::new(ControlFactoryRegistry::new(factories)),
        Arc::new(invoker),
    );

    let built = use_case
        .create_from_current_clipboard()
        .await
        .unwrap()
        .unwrap();

    assert_eq!(built.control().map(|c| c.name()), Some("recorded"));
    assert_eq!(seen.lock().unwrap().as_deref(), Some("ui-thread"));

    drop(use_case);
    handle.join().unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn default_factories_prefer_files_over_text() {
    let (invoker, main_loop) = MainThreadDispatcher::channel(4);
    let handle = main_loop.spawn("ui-thread").unwrap();

    let use_case = DataControlPackageFactory::new(
        FixedCapture::new(Err(CaptureError::FormatNotUnderstood)),
        Arc::new(ControlFactoryRegistry::with_default_factories()),
        Arc::new(invoker),
    );

    let mixed = use_case
        .create_from_data_package(DataPackage::new(vec![
            DataItem::text("caption"),
            DataItem::from(FileData::new("/data/report.pdf", true)),
        ]))
        .await
        .unwrap();
    let files = mixed
        .control()
        .and_then(|c| c.as_any().downcast_ref::<FileListControl>())
        .expect("file list control");
    assert_eq!(files.entries[0].name, "report.pdf");

    let text = use_case
        .create_from_data_package(DataPackage::new(vec![DataItem::text("  hello  ")]))
        .await
        .unwrap();
    let preview = text
        .control()
        .and_then(|c| c.as_any().downcast_ref::<TextControl>())
        .expect("text control");
    assert_eq!(preview.preview, "hello");

    assert!(use_case.create_from_current_clipboard().await.unwrap().is_none());

    drop(use_case);
    handle.join().unwrap();
}

/// Capture that only completes once another task hands it the package.
struct DeferredCapture(Mutex<Option<oneshot::Receiver<DataPackage>>>);

#[async_trait]
impl DataPackageFactoryPort for DeferredCapture {
    async fn create_from_current_clipboard(&self) -> Result<DataPackage, CaptureError> {
        let pending = self.0.lock().unwrap().take();
        match pending {
            Some(rx) => rx
                .await
                .map_err(|_| CaptureError::Platform(anyhow::anyhow!("capture abandoned"))),
            None => Err(CaptureError::FormatNotUnderstood),
        }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn capture_suspends_instead_of_blocking_the_runtime() {
    let (invoker, main_loop) = MainThreadDispatcher::channel(4);
    let handle = main_loop.spawn("ui-thread").unwrap();

    let (tx, rx) = oneshot::channel();
    let use_case = DataControlPackageFactory::new(
        Arc::new(DeferredCapture(Mutex::new(Some(rx)))),
        Arc::new(ControlFactoryRegistry::with_default_factories()),
        Arc::new(invoker),
    );

    // on a single-threaded runtime this only runs if the capture yields
    let producer = tokio::spawn(async move {
        tx.send(DataPackage::new(vec![DataItem::text("late")])).unwrap();
    });

    let built = use_case
        .create_from_current_clipboard()
        .await
        .unwrap()
        .expect("package should be built");
    producer.await.unwrap();

    assert_eq!(built.control().map(|c| c.name()), Some("text"));

    drop(use_case);
    handle.join().unwrap();
}
