//! Shiori - browse and track AniList from the terminal
//!
//! A thin front end over the library's repositories: every subcommand maps to
//! one repository call and prints the result. Credentials are read from the
//! settings store (written by `shiori login`) or `SHIORI_ACCESS_TOKEN`.

use chrono::{Local, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};
use std::path::PathBuf;
use std::sync::Arc;

use shiori::config::{ClientConfig, TOKEN_ENV};
use shiori::model::{
    MediaFormat, MediaListStatus, MediaSeason, MediaType, NotificationFilter, TitleFormat,
};
use shiori::paging::{Pager, RepositoryPagingSource};
use shiori::season;
use shiori::settings::SettingsStore;
use shiori::types::{ListEntryUpdateBuilder, SearchFiltersBuilder};
use shiori::{Outcome, Repositories, Session, logging};

/// AniList tokens are issued for one year.
const TOKEN_LIFETIME_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Parser, Debug)]
#[command(name = "shiori")]
#[command(about = "Browse the AniList catalog and update your list")]
struct Args {
    /// Client configuration file (endpoint, timeout)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Settings file holding the session and display preferences
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Log level for the library when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Results per page
    #[arg(long, default_value = "20")]
    per_page: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trending right now
    Trending {
        #[arg(value_enum, default_value = "anime")]
        kind: Kind,
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Anime of a season (the current one by default)
    Seasonal {
        #[arg(value_enum)]
        season: Option<Season>,
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Anime of next season
    Upcoming {
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Highest rated of all time
    Top {
        #[arg(value_enum, default_value = "anime")]
        kind: Kind,
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Search the catalog
    Search {
        query: String,
        #[arg(short, long, value_enum, default_value = "anime")]
        kind: Kind,
        /// Only these genres (repeatable)
        #[arg(short, long)]
        genre: Vec<String>,
        /// Only TV series
        #[arg(long)]
        tv: bool,
        /// Number of pages to fetch
        #[arg(long, default_value = "1")]
        pages: u32,
    },
    /// Every genre name
    Genres,
    /// Details of one anime or manga
    Media {
        id: i32,
        /// Also list the main cast
        #[arg(long)]
        cast: bool,
    },
    /// Details of a character
    Character { id: i32 },
    /// Details of a staff member
    Staff { id: i32 },
    /// Details of a studio and its productions
    Studio { id: i32 },
    /// Your notifications
    Notifications {
        #[arg(value_enum, default_value = "all")]
        filter: Filter,
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Mark everything as read
        #[arg(long)]
        reset: bool,
    },
    /// Toggle a favourite
    Favourite {
        #[arg(value_enum)]
        target: Target,
        id: i32,
    },
    /// Record progress on an anime or manga
    Progress {
        media_id: i32,
        progress: i32,
        /// Score from 0 to 100
        #[arg(long)]
        score: Option<f64>,
    },
    /// Remove an entry from your list
    Remove { entry_id: i32 },
    /// Store an access token (from --token or SHIORI_ACCESS_TOKEN)
    Login {
        #[arg(long)]
        token: Option<String>,
    },
    /// Forget the stored access token
    Logout,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Anime,
    Manga,
}

impl From<Kind> for MediaType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Anime => MediaType::Anime,
            Kind::Manga => MediaType::Manga,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl From<Season> for MediaSeason {
    fn from(season: Season) -> Self {
        match season {
            Season::Winter => MediaSeason::Winter,
            Season::Spring => MediaSeason::Spring,
            Season::Summer => MediaSeason::Summer,
            Season::Fall => MediaSeason::Fall,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Filter {
    All,
    Airing,
    Activity,
    Forum,
    Follows,
    Media,
}

impl From<Filter> for NotificationFilter {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => NotificationFilter::All,
            Filter::Airing => NotificationFilter::Airing,
            Filter::Activity => NotificationFilter::Activity,
            Filter::Forum => NotificationFilter::Forum,
            Filter::Follows => NotificationFilter::Follows,
            Filter::Media => NotificationFilter::Media,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Target {
    Anime,
    Manga,
    Character,
    Staff,
    Studio,
}

fn require<T>(outcome: Outcome<T>) -> Result<T> {
    outcome.into_result().map_err(|message| eyre!(message))
}

fn print_media(index: usize, media: &shiori::model::Media, format: TitleFormat) {
    let score = if media.average_score < 0 {
        "--".to_string()
    } else {
        format!("{}%", media.average_score)
    };
    println!(
        "{:>3}. [{:>6}] {} ({:?}, {})",
        index + 1,
        media.id,
        media.display_title(format),
        media.format,
        score
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let store = match &args.settings {
        Some(path) => SettingsStore::open(path).await?,
        None => SettingsStore::open_default().await?,
    };
    let base = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    }
    .with_env_overrides()?;

    let settings = store.current();
    let session = Arc::new(if base.is_authenticated() {
        Session::new(base.clone())?
    } else {
        Session::from_settings(&base, &settings)?
    });
    let repositories = Repositories::new(session.clone());
    let format = settings.title_format;
    let per_page = args.per_page;

    match args.command {
        Command::Trending { kind, page } => {
            let media = require(repositories.home.trending(kind.into(), page, per_page).await)?;
            for (index, entry) in media.iter().enumerate() {
                print_media(index, entry, format);
            }
        }
        Command::Seasonal { season, year, page } => {
            let today = Local::now().date_naive();
            let target = season::resolve(season.map(Into::into), year, today);
            println!("{target}");
            let media = require(
                repositories
                    .home
                    .seasonal(target.season, target.year, page, per_page)
                    .await,
            )?;
            for (index, entry) in media.iter().enumerate() {
                print_media(index, entry, format);
            }
        }
        Command::Upcoming { page } => {
            let today = Local::now().date_naive();
            println!("{}", season::upcoming(today));
            let media = require(repositories.home.upcoming(page, per_page, today).await)?;
            for (index, entry) in media.iter().enumerate() {
                print_media(index, entry, format);
            }
        }
        Command::Top { kind, page } => {
            let media = require(repositories.home.top_ranked(kind.into(), page, per_page).await)?;
            for (index, entry) in media.iter().enumerate() {
                print_media(index, entry, format);
            }
        }
        Command::Search {
            query,
            kind,
            genre,
            tv,
            pages,
        } => {
            let mut builder = SearchFiltersBuilder::default();
            builder
                .query(query)
                .media_type(MediaType::from(kind))
                .include_genres(genre);
            if tv {
                builder.formats(vec![MediaFormat::Tv]);
            }
            let filters = builder.build()?;

            let home = repositories.home.clone();
            let source = RepositoryPagingSource::new(move |page, per_page| {
                let home = home.clone();
                let filters = filters.clone();
                async move { home.search(&filters, page, per_page).await }
            });
            let mut pager = Pager::new(Arc::new(source), per_page);
            require(pager.refresh().await)?;
            for _ in 1..pages {
                if pager.is_end_reached() || require(pager.load_next().await)? == 0 {
                    break;
                }
            }
            for (index, entry) in pager.items().enumerate() {
                print_media(index, entry, format);
            }
        }
        Command::Genres => {
            for genre in require(repositories.home.genres().await)? {
                println!("{genre}");
            }
        }
        Command::Media { id, cast } => {
            let media = require(repositories.media.details(id).await)?;
            println!("{}", media.display_title(format));
            println!("{:?} / {:?} / {:?}", media.media_type, media.format, media.status);
            if !media.start_date.is_unknown() {
                println!("Started: {}", media.start_date.to_long_string());
            }
            if !media.genres.is_empty() {
                println!("Genres: {}", media.genres.join(", "));
            }
            if let Some(entry) = &media.list_entry {
                println!("On your list: {:?}, progress {}", entry.status, entry.progress);
            }
            println!();
            println!("{}", media.description);
            if cast {
                println!();
                for member in require(repositories.media.characters(id, 1, per_page).await)? {
                    println!("{:?}: {}", member.role, member.character.name);
                }
            }
        }
        Command::Character { id } => {
            let character = require(repositories.character.details(id).await)?;
            println!("{}", character.name.display());
            println!();
            println!("{}", character.biography);
        }
        Command::Staff { id } => {
            let staff = require(repositories.staff.details(id).await)?;
            println!("{}", staff.name.display());
            println!();
            println!("{}", staff.biography);
        }
        Command::Studio { id } => {
            let studio = require(repositories.studio.details(id).await)?;
            println!("{} ({} favourites)", studio.name, studio.favourites);
            for production in require(repositories.studio.media(id, 1, per_page).await)? {
                println!("  {}", production.display_title(format));
            }
        }
        Command::Notifications {
            filter,
            page,
            reset,
        } => {
            if !session.is_authenticated() {
                return Err(eyre!("not signed in, run `shiori login` first"));
            }
            let notifications = require(
                repositories
                    .notification
                    .notifications(filter.into(), page, per_page, reset)
                    .await,
            )?;
            for notification in notifications {
                let when = chrono::DateTime::from_timestamp(notification.created_at, 0)
                    .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                println!("{when}  {}", notification.text());
            }
        }
        Command::Favourite { target, id } => {
            let now_favourite = match target {
                Target::Anime => repositories.media.toggle_favourite(MediaType::Anime, id).await,
                Target::Manga => repositories.media.toggle_favourite(MediaType::Manga, id).await,
                Target::Character => repositories.character.toggle_favourite(id).await,
                Target::Staff => repositories.staff.toggle_favourite(id).await,
                Target::Studio => repositories.studio.toggle_favourite(id).await,
            };
            if require(now_favourite)? {
                println!("Added to favourites");
            } else {
                println!("Removed from favourites");
            }
        }
        Command::Progress {
            media_id,
            progress,
            score,
        } => {
            let media = require(repositories.media.details(media_id).await)?;
            let mut builder = ListEntryUpdateBuilder::default();
            builder.progress(progress);
            if let Some(score) = score {
                builder.score(score);
            }
            if media.list_entry.is_none() {
                builder.status(MediaListStatus::Current);
            }
            let update = builder.build()?;
            let entry = require(
                repositories
                    .media
                    .save_list_entry(media_id, media.total(), media.list_entry.as_ref(), update)
                    .await,
            )?;
            println!(
                "{}: {:?}, progress {}",
                media.display_title(format),
                entry.status,
                entry.progress
            );
        }
        Command::Remove { entry_id } => {
            if require(repositories.media.delete_list_entry(entry_id).await)? {
                println!("Removed");
            } else {
                println!("Nothing was removed");
            }
        }
        Command::Login { token } => {
            let token = token
                .or_else(|| std::env::var(TOKEN_ENV).ok())
                .filter(|token| !token.trim().is_empty())
                .ok_or_else(|| eyre!("pass --token or set {TOKEN_ENV}"))?;
            session.sign_in(token.clone())?;
            let viewer = require(repositories.user.viewer().await)?;
            store
                .sign_in(token, "Bearer", Utc::now().timestamp() + TOKEN_LIFETIME_SECS, viewer.id)
                .await?;
            println!("Signed in as {}", viewer.name);
        }
        Command::Logout => {
            store.sign_out().await?;
            session.sign_out()?;
            println!("Signed out");
        }
    }

    Ok(())
}
