use crate::error::{CliError, Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::settings;
use crate::ui;
use page::{OutputFormat, PageRenderer};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub config: Option<String>,
    pub output: String,
    pub format: Option<OutputFormat>,
    pub line_numbers: bool,
    pub verbose: bool,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let to_stdout = args.output == "-";
    ui::set_quiet(to_stdout);
    let verbose = args.verbose;

    let mut progress = ProgressTracker::new("Render Page").with_steps(&[
        "Loading configuration",
        "Loading catalog",
        "Validating catalog",
        "Rendering page",
        "Writing output",
    ]);

    progress.start_step();
    let mut config = settings::load_config(args.config.as_deref())?;
    if args.line_numbers {
        config.show_line_numbers = true;
    }
    progress.complete_step();

    progress.start_step();
    let catalog = config
        .resolve_catalog()
        .with_context(|| "Could not load catalog")?;
    if verbose {
        ui::detail_message(&format!(
            "Using {} ({} entries)",
            settings::catalog_source(&config),
            catalog.len()
        ));
    }
    progress.complete_step();

    progress.start_step();
    catalog.validate()?;
    progress.complete_step();

    progress.start_step();
    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&args.output));
    let renderer = format.renderer(config.include_styles);
    let page = PageRenderer::new(config.clone()).render(&catalog);
    let output = renderer.render(&page)?;
    if verbose {
        ui::detail_message(&format!(
            "Rendered {} cards as {} ({} bytes)",
            page.cards.len(),
            renderer.extension(),
            output.len()
        ));
    }
    progress.complete_step();

    progress.start_step();
    if to_stdout {
        io::stdout()
            .write_all(output.as_bytes())
            .with_context(|| "Failed to write page to stdout")?;
    } else {
        write_output(Path::new(&args.output), &output)?;
    }
    progress.complete_step();

    progress.complete();
    ui::success_message(&format!("Page written to {}", args.output));

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::Io(e).with_context(format!("Failed to create {}", parent.display())))?;
    }
    fs::write(path, content)
        .map_err(|e| CliError::Io(e).with_context(format!("Failed to write {}", path.display())))
}
