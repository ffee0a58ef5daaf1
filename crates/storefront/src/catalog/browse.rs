use crate::prelude::{eprint, eprintln, *};
use storefront_core::catalog::{parse_command, ControlEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::controller::{Controller, Frame};
use super::render::present;

const PROMPT: &str = "> ";

#[derive(Debug, clap::Args, Clone)]
pub struct BrowseOptions {
    /// Number of product cards per row
    #[arg(long, env = "STOREFRONT_COLUMNS", default_value = super::DEFAULT_COLUMNS)]
    pub columns: usize,
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    let source = super::http_source(&global);
    let render_options = super::render_options(options.columns, &global);
    let mut controller = Controller::new();

    for frame in controller.start(&source).await? {
        present(&frame, &render_options);
    }

    if global.verbose {
        eprintln!("Type `help` for the list of commands");
    }

    let reader = BufReader::new(tokio::io::stdin());
    session(&mut controller, reader, |frame| present(frame, &render_options), true).await
}

/// Read control commands line by line until `quit` or EOF, presenting every frame they produce
async fn session<R, F>(
    controller: &mut Controller,
    mut reader: R,
    mut present_frame: F,
    prompt: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&Frame),
{
    let mut line = String::new();

    loop {
        if prompt {
            eprint!("{PROMPT}");
        }

        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            break; // EOF
        }

        if line.trim().is_empty() {
            continue;
        }

        let frames = match parse_command(&line) {
            Ok(ControlEvent::Quit) => break,
            Ok(event) => controller.handle(&event),
            Err(message) => vec![Frame::Status {
                message,
                is_error: true,
            }],
        };

        for frame in &frames {
            present_frame(frame);
        }
    }

    Ok(())
}
