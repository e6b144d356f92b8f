//! Command implementations. Each returns its result; printing is left to `main`.

use anyhow::{Context, Result};
use parsha_filter::{BookmarkMode, CommentFilters, verses_with_visible_comments};
use parsha_model::{
    TextSource, VerseCoordinate, extract_all, parsha_path, signup_path, verse_path,
};
use parsha_settings::{FileSlot, SettingsError, TextSourcesConfig, TextSourcesStore};

use crate::cli::{CommentsArgs, PathCommand, SourcesAction, SourcesArgs};
use crate::library::ParshaLibrary;

/// Every coordinate of the parsha in reading order.
pub fn run_coords(library: &ParshaLibrary, parsha: u32) -> Result<Vec<VerseCoordinate>> {
    let data = library
        .load_parsha(parsha)
        .with_context(|| format!("loading parsha {parsha}"))?;
    Ok(extract_all(&data))
}

/// Coordinates of verses with at least one visible comment.
///
/// With no commenters given, every commenter appearing in the parsha is shown.
pub fn run_comments(library: &ParshaLibrary, args: &CommentsArgs) -> Result<Vec<VerseCoordinate>> {
    let data = library
        .load_parsha(args.parsha)
        .with_context(|| format!("loading parsha {}", args.parsha))?;

    let filters = if args.commenters.is_empty() {
        let everyone = data
            .verses()
            .flat_map(|(_, verse)| verse.comments.keys().cloned())
            .collect::<Vec<_>>();
        CommentFilters::all_enabled(everyone)
    } else {
        CommentFilters::all_enabled(args.commenters.iter().cloned())
    };
    let mode = if args.mine {
        BookmarkMode::My
    } else {
        BookmarkMode::All
    };
    let filters = filters.with_mode(mode);
    tracing::debug!(?filters, "Filtering comments");

    Ok(verses_with_visible_comments(&data, &filters))
}

/// Initialize the settings store from the saved settings and metadata, then
/// apply the requested action.
pub fn run_sources(library: &ParshaLibrary, args: &SourcesArgs) -> Result<TextSourcesConfig> {
    let metadata = library.load_metadata().context("loading metadata")?;
    let slot = match &args.settings_dir {
        Some(dir) => FileSlot::new(dir),
        None => FileSlot::default_location(),
    };
    let store = TextSourcesStore::new(slot);
    store
        .initialize(&metadata)
        .map_err(settings_error)
        .context("initializing settings")?;

    let result = match &args.action {
        SourcesAction::Show => store.current(),
        SourcesAction::SetMain { source } => store.set_main(parse_source(source)?),
        SourcesAction::Toggle { source } => store.toggle(&parse_source(source)?),
        SourcesAction::Enable { source } => store.enable(&parse_source(source)?),
    };
    result.map_err(settings_error)
}

/// Keep the error chain and put the user-facing message on top.
fn settings_error(error: SettingsError) -> anyhow::Error {
    let message = error.user_message();
    anyhow::Error::new(error).context(message)
}

fn parse_source(source: &str) -> Result<TextSource> {
    Ok(TextSource::new(source)?)
}

pub fn run_path(command: &PathCommand) -> String {
    match command {
        PathCommand::Parsha {
            parsha,
            verse: Some(coord),
        } => verse_path(parsha, coord),
        PathCommand::Parsha {
            parsha,
            verse: None,
        } => parsha_path(parsha),
        PathCommand::Signup { token } => signup_path(token),
    }
}
