//! CLI command definitions and handlers
//!
//! Each role's command group corresponds to that role's dashboard zone and
//! passes through the route guard before anything is fetched:
//! `admin` ↔ `/swinfy`, `sponsor` ↔ `/uwh`, `trainer` ↔ `/trainer`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod admin;
pub mod args;
pub mod auth;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod route;
pub mod sponsor;
pub mod status;
pub mod trainer;

pub use args::{OutputFormat, ReviewFilterArgs, SponsorFilterArgs, SubmissionFilterArgs};
pub use context::CommandContext;

use completions::{district_candidates, submission_id_candidates};

/// progdash - command-line views of the AI Literacy program dashboard
#[derive(Parser, Debug)]
#[command(name = "progdash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "PROGDASH_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "PROGDASH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the dashboard API base URL
    #[arg(long, global = true, env = "PROGDASH_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PROGDASH_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Keep polling and re-render on every update (polled views only)
    #[arg(long, short = 'w', global = true)]
    pub watch: bool,

    /// Bypass cache, fetch fresh data from API
    #[arg(long, global = true, env = "PROGDASH_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e', env = "PROGDASH_EMAIL", hide_env = true)]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, env = "PROGDASH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// End the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Show where the dashboard would send the current session for a path
    #[command(after_help = "EXAMPLES:\n  \
            progdash route /dashboard          # Your role's dashboard\n  \
            progdash route /swinfy/photos      # Allowed, or redirected")]
    Route {
        /// Dashboard path, e.g. /uwh/gallery
        path: String,
    },

    /// Display version information
    Version,

    /// Swinfy admin views (verification, media review, sponsor control)
    #[command(subcommand)]
    Admin(AdminCommands),

    /// UWH sponsor views (read-only reporting)
    #[command(subcommand)]
    Sponsor(SponsorCommands),

    /// Trainer views (session reports, students, profile)
    #[command(subcommand)]
    Trainer(TrainerCommands),

    /// Generate shell completions (static)
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   progdash completion bash > /etc/bash_completion.d/progdash
  zsh:    progdash completion zsh > \"${fpath[1]}/_progdash\"
  fish:   progdash completion fish > ~/.config/fish/completions/progdash.fish

Dynamic completions (includes district and submission IDs via API):
  bash:   echo 'source <(COMPLETE=bash progdash)' >> ~/.bashrc
  zsh:    echo 'source <(COMPLETE=zsh progdash)' >> ~/.zshrc
  fish:   echo 'COMPLETE=fish progdash | source' >> ~/.config/fish/config.fish")]
    Completion {
        /// Shell to generate completions for (static only)
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Admin
// ============================================================================

/// Swinfy admin subcommands
#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// Program KPIs and review queue sizes
    Summary,

    /// Submission verification queue
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            progdash admin submissions                     # All submissions\n  \
            progdash admin submissions -s submitted        # Awaiting review\n  \
            progdash admin submissions -d <district> --day 2 -w"
    )]
    Submissions {
        #[command(flatten)]
        filters: SubmissionFilterArgs,
    },

    /// Show one submission with its photos and projects
    Submission {
        #[arg(add = submission_id_candidates())]
        id: String,
    },

    /// Verify a submission
    Verify {
        #[arg(add = submission_id_candidates())]
        id: String,

        /// Reviewer notes
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Flag a submission for follow-up (reason required)
    Flag {
        #[arg(add = submission_id_candidates())]
        id: String,

        #[arg(long, short = 'r')]
        reason: String,
    },

    /// Reject a submission (reason required)
    Reject {
        #[arg(add = submission_id_candidates())]
        id: String,

        #[arg(long, short = 'r')]
        reason: String,
    },

    /// Photo review queue (pending by default)
    Photos {
        #[command(flatten)]
        filters: SubmissionFilterArgs,
    },

    /// Review photos
    #[command(subcommand)]
    Photo(PhotoCommands),

    /// Project review queue (pending by default)
    Projects {
        #[command(flatten)]
        filters: ReviewFilterArgs,
    },

    /// Review projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Full activity log
    Activity,

    /// Trainer roster with submission counters
    Trainers {
        #[arg(long, short = 'd', add = district_candidates())]
        district: Option<String>,
    },

    /// What the sponsor currently sees
    Control,

    /// Update the sponsor status banner
    #[command(after_help = "EXAMPLES:\n  \
            progdash admin banner --status paused -m \"Exams this week\" --color yellow")]
    Banner {
        /// Program status (active, paused, completed)
        #[arg(long, short = 's')]
        status: String,

        #[arg(long, short = 'm')]
        message: String,

        #[arg(long, short = 'c', default_value = "green")]
        color: String,
    },

    /// Replace the sponsor financial summary
    #[command(after_help = "EXAMPLES:\n  \
            progdash admin financials budget=1200000 spent=450000 currency=INR")]
    Financials {
        /// KEY=VALUE pairs; numbers and booleans are sent as JSON values
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Districts
    Districts,

    /// Schools, optionally for one district
    Schools {
        #[arg(long, short = 'd', add = district_candidates())]
        district: Option<String>,
    },
}

/// Photo review subcommands
#[derive(Subcommand, Debug)]
pub enum PhotoCommands {
    Approve { id: String },

    Reject {
        id: String,

        #[arg(long, short = 'r')]
        reason: Option<String>,
    },

    /// Mark as featured in the sponsor gallery
    Feature { id: String },

    Delete {
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Approve several photos in one request
    BulkApprove {
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<String>,
    },

    /// Reject several photos in one request (reason required)
    BulkReject {
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<String>,

        #[arg(long, short = 'r')]
        reason: String,
    },
}

/// Project review subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    Approve { id: String },

    Reject {
        id: String,

        #[arg(long, short = 'r')]
        reason: Option<String>,
    },

    Feature { id: String },

    /// Write the sponsor-facing description
    Edit {
        id: String,

        #[arg(long, short = 'D')]
        description: String,

        /// Internal reviewer notes
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },
}

// ============================================================================
// Sponsor
// ============================================================================

/// UWH sponsor subcommands
#[derive(Subcommand, Debug)]
pub enum SponsorCommands {
    /// Status banner, KPIs, and financials
    Summary {
        #[command(flatten)]
        filters: SponsorFilterArgs,
    },

    /// Approved photos of verified sessions
    Gallery {
        #[command(flatten)]
        filters: SponsorFilterArgs,
    },

    /// Approved and featured student projects
    Projects {
        #[command(flatten)]
        filters: SponsorFilterArgs,
    },

    /// Sponsor-visible activity feed
    Activity,

    /// Completion per district
    Districts,

    /// Curriculum days and schedule
    Curriculum,
}

// ============================================================================
// Trainer
// ============================================================================

/// Trainer subcommands
#[derive(Subcommand, Debug)]
pub enum TrainerCommands {
    /// Own submission and roster counters
    Summary,

    /// Own submission history
    Submissions,

    /// Show one of your submissions
    Submission { id: String },

    /// Submit a daily session report
    #[command(after_help = "EXAMPLES:\n  \
            progdash trainer submit --school <id> --day 1 --students 52 \\\n    \
            --photo a.jpg --photo b.jpg --photo c.jpg --topic \"What is AI\"")]
    Submit {
        #[arg(long)]
        school: String,

        /// Curriculum day (1-4)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        day: u8,

        /// Students present
        #[arg(long)]
        students: u32,

        /// Topic covered (repeatable)
        #[arg(long = "topic")]
        topics: Vec<String>,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, default_value = "")]
        challenges: String,

        /// Session photo (3 to 5, repeatable)
        #[arg(long = "photo", required = true)]
        photos: Vec<PathBuf>,

        /// Attendance sheet
        #[arg(long)]
        attendance: Option<PathBuf>,
    },

    /// Add a student project to a submission
    AddProject {
        submission_id: String,

        #[arg(long)]
        student: String,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        age: Option<u8>,

        #[arg(long, default_value = "")]
        grade: String,

        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Student roster
    Students,

    /// Manage students
    #[command(subcommand)]
    Student(StudentCommands),

    /// Own project highlights
    Projects,

    /// Own uploaded photos with review state
    Gallery,

    /// Profile and assigned school
    Profile,

    /// Change display name or profile photo
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Schools visible to you
    Schools,

    /// Curriculum days
    Curriculum,
}

/// Student fields shared by add and update
#[derive(clap::Args, Debug, Clone, Default)]
pub struct StudentArgs {
    #[arg(long)]
    pub age: Option<u8>,

    #[arg(long)]
    pub grade: Option<String>,

    #[arg(long)]
    pub parent: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

/// Student roster subcommands
#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    Add {
        #[arg(long)]
        name: String,

        #[command(flatten)]
        fields: StudentArgs,
    },

    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: StudentArgs,
    },

    Delete {
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
