use super::*;

#[derive(clap::Args)]
pub struct Args {
    /// RON file overriding the startup scene.
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<()> {
    let settings = cfg::Settings::load(args.settings.as_deref())?;
    let mut editor = Editor::new(settings);
    let snapshots = editor.subscribe();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session(&mut editor, &snapshots, stdin.lock(), stdout.lock())
}

/// Reads one command per line until `quit` or end of input. Bad lines are
/// reported and skipped.
pub fn session<R, W>(
    editor: &mut Editor,
    snapshots: &mpsc::Receiver<Snapshot>,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    print_latest(snapshots, &mut writer)?;
    for line in reader.lines() {
        let line = line.context("Reading command")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(writer, "error: {err:#}")?;
                continue;
            }
        };
        debug!("{command:?}");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(writer, "{HELP}")?,
            Command::Show => writeln!(writer, "{}", editor.snapshot())?,
            command => {
                if !editor.apply(command) {
                    writeln!(writer, "ignored: triangle is degenerate")?;
                }
                print_latest(snapshots, &mut writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

fn print_latest<W: Write>(snapshots: &mpsc::Receiver<Snapshot>, writer: &mut W) -> Result<()> {
    if let Some(snapshot) = snapshots.try_iter().last() {
        writeln!(writer, "{snapshot}")?;
    }
    Ok(())
}
