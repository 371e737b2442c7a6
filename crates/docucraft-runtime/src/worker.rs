use crate::handlers::{self, HandlerResult, ProgressReporter};
use crate::{DocCommand, DocUpdate, OperationOutput};
use tokio::sync::mpsc;

/// Steps reported by every command: load, process, write, done
const STEPS_PER_COMMAND: usize = 3;

/// Async worker task that processes commands and sends updates.
///
/// Commands run one at a time in arrival order. Each emits progress updates
/// followed by exactly one `Complete` or `Error`.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<DocCommand>,
    update_tx: mpsc::UnboundedSender<DocUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(cmd: DocCommand, update_tx: &mpsc::UnboundedSender<DocUpdate>) {
    let operation = cmd.operation();
    let progress = ProgressReporter::new(operation, STEPS_PER_COMMAND, update_tx);
    log::info!("{operation}: started");

    match run_command(cmd, &progress).await {
        Ok(output) => {
            log::info!("{operation}: wrote {}", output.path.display());
            let _ = update_tx.send(DocUpdate::Complete { output });
        }
        Err(e) => {
            log::error!("{operation} failed: {e}");
            let _ = update_tx.send(DocUpdate::Error {
                message: format!("{operation} failed: {e}"),
            });
        }
    }
}

async fn run_command(
    cmd: DocCommand,
    progress: &ProgressReporter<'_>,
) -> HandlerResult<OperationOutput> {
    match cmd {
        DocCommand::MergeImages {
            inputs,
            spec,
            output_dir,
        } => handlers::images::handle_merge_images(inputs, spec, output_dir, progress).await,
        DocCommand::ImagesToPdf {
            inputs,
            options,
            output_path,
        } => handlers::pdf::handle_images_to_pdf(inputs, options, output_path, progress).await,
        DocCommand::MergePdfs {
            inputs,
            output_path,
        } => handlers::pdf::handle_merge_pdfs(inputs, output_path, progress).await,
        DocCommand::CompressPdf { input, output_path } => {
            handlers::pdf::handle_compress_pdf(input, output_path, progress).await
        }
        DocCommand::CompressImage {
            input,
            options,
            output_dir,
        } => handlers::images::handle_compress_image(input, options, output_dir, progress).await,
        DocCommand::CropImage {
            input,
            region,
            format,
            output_dir,
        } => {
            handlers::images::handle_crop_image(input, region, format, output_dir, progress).await
        }
    }
}
