mod store;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use coursehub::api::{ApiClient, ApiError, Transport};
use coursehub::catalog::CourseQuery;
use coursehub::config::{API_URL_ENV, DEFAULT_API_URL};
use coursehub::forms::{CourseDraft, RegistrationDraft, profile_update, validate_login};
use coursehub::identity::IdentityCache;
use coursehub::session::SessionStore;
use coursehub::types::CourseLevel;
use coursehub::ApiConfig;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use crate::store::{FileSessionStore, default_token_path};
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "coursehub", about = "Course catalog API CLI")]
struct Cli {
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    base_url: String,

    /// Where the bearer token is kept between runs.
    #[arg(long, env = "COURSEHUB_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        full_name: Option<String>,
    },
    Profile(ProfileCommand),
    Courses(CoursesCommand),
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Args, Debug)]
struct CoursesCommand {
    #[command(subcommand)]
    command: CoursesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CoursesSubcommand {
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_parser = parse_level)]
        level: Option<CourseLevel>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long)]
        published: Option<bool>,
    },
    Get {
        id: String,
    },
    Mine,
    Create(CourseArgs),
    Update {
        id: String,
        #[command(flatten)]
        fields: CourseArgs,
    },
    Delete {
        id: String,
    },
}

/// Course fields; omitted flags keep the form default (create) or the
/// current value (update).
#[derive(Args, Debug, Default)]
struct CourseArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long, value_parser = parse_level)]
    level: Option<CourseLevel>,
    #[arg(long)]
    duration: Option<String>,
    #[arg(long)]
    credits: Option<String>,
    #[arg(long)]
    rating: Option<String>,
    #[arg(long)]
    duration_text: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    published: Option<bool>,
}

impl CourseArgs {
    fn apply(self, mut draft: CourseDraft) -> CourseDraft {
        let text_fields = [
            (self.title, &mut draft.title),
            (self.description, &mut draft.description),
            (self.category, &mut draft.category),
            (self.duration, &mut draft.duration),
            (self.credits, &mut draft.credits),
            (self.rating, &mut draft.rating),
            (self.duration_text, &mut draft.duration_text),
            (self.image_url, &mut draft.image_url),
        ];
        for (value, slot) in text_fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(level) = self.level {
            draft.level = level;
        }
        if let Some(published) = self.published {
            draft.published = published;
        }
        draft
    }
}

fn parse_level(raw: &str) -> Result<CourseLevel, String> {
    CourseLevel::parse(raw).ok_or_else(|| format!("unknown level `{raw}` (expected Beginner, Intermediate or Advanced)"))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FileSessionStore::new(cli.token_file.unwrap_or_else(default_token_path));
    let api = ApiClient::new(ApiConfig::new(&cli.base_url), ReqwestTransport::new(), store);

    let output = run(api, cli.command).await?;
    print_json(&output)
}

async fn run<T: Transport, S: SessionStore>(api: ApiClient<T, S>, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Login { username, password } => {
            let credentials = validate_login(&username, &password).map_err(|m| CliError::Invalid(m.to_owned()))?;
            let token = api.login(&credentials).await?;
            Ok(json!({ "username": credentials.username, "token_type": token.token_type }))
        }
        Command::Logout => {
            api.logout();
            Ok(json!({ "logged_out": true }))
        }
        Command::Whoami => {
            let identity = IdentityCache::new(api).fetch_current().await?;
            Ok(serde_json::to_value(identity)?)
        }
        Command::Register { username, email, password, full_name } => {
            let draft = RegistrationDraft { username, email, password, full_name: full_name.unwrap_or_default() };
            let registration = draft.validate().map_err(|errors| CliError::Invalid(describe(&errors)))?;
            Ok(serde_json::to_value(api.register(&registration).await?)?)
        }
        Command::Profile(profile) => match profile.command {
            ProfileSubcommand::Update { full_name, email } => {
                let update = profile_update(full_name.as_deref().unwrap_or(""), email.as_deref().unwrap_or(""))
                    .map_err(|m| CliError::Invalid(m.to_owned()))?;
                Ok(serde_json::to_value(api.update_profile(&update).await?)?)
            }
        },
        Command::Courses(courses) => run_courses(&api, courses.command).await,
    }
}

async fn run_courses<T: Transport, S: SessionStore>(
    api: &ApiClient<T, S>,
    command: CoursesSubcommand,
) -> Result<Value, CliError> {
    match command {
        CoursesSubcommand::List { category, level, search, page, limit, published } => {
            let query = CourseQuery { category, level, search, page: page.max(1), limit, published };
            Ok(serde_json::to_value(api.list_courses(&query).await?)?)
        }
        CoursesSubcommand::Get { id } => Ok(serde_json::to_value(api.get_course(&id).await?)?),
        CoursesSubcommand::Mine => Ok(serde_json::to_value(api.my_courses().await?)?),
        CoursesSubcommand::Create(fields) => {
            let course = fields.apply(CourseDraft::default()).validate().map_err(|e| CliError::Invalid(describe(&e)))?;
            Ok(serde_json::to_value(api.create_course(&course).await?)?)
        }
        CoursesSubcommand::Update { id, fields } => {
            let current = api.get_course(&id).await?;
            let course = fields
                .apply(CourseDraft::from_course(&current))
                .validate()
                .map_err(|e| CliError::Invalid(describe(&e)))?;
            Ok(serde_json::to_value(api.update_course(&id, &course).await?)?)
        }
        CoursesSubcommand::Delete { id } => {
            api.delete_course(&id).await?;
            Ok(json!({ "deleted": id }))
        }
    }
}

/// One `field: message` entry per invalid field, in form order.
fn describe<F: std::fmt::Debug>(errors: &std::collections::BTreeMap<F, &'static str>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {message}", format!("{field:?}").to_ascii_lowercase()))
        .collect::<Vec<_>>()
        .join("; ")
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
