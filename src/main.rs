use almare_site::analytics::{AnalyticsSink, ConsoleSink, JsonLinesSink};
use almare_site::forms::contact::ContactForm;
use almare_site::forms::donation::{DonationForm, format_amount};
use almare_site::forms::login::LoginForm;
use almare_site::forms::submit::{Receipt, SimulatedGateway};
use almare_site::generate::{self, Site};
use almare_site::i18n::{Catalog, Locale, Translator};
use almare_site::config;
use almare_site::output::{self, SubmitMessages};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "almare")]
#[command(about = "Static site generator for the Almare nonprofit website")]
#[command(long_about = "\
Static site generator for the Almare nonprofit website

Renders every page in Spanish and English from embedded templates and
translations. The content directory only holds what changes per deployment.

Content structure:

  content/
  ├── config.toml                  # Site config (optional, overrides stock defaults)
  ├── locales/
  │   ├── es.toml                  # Spanish string overrides (optional)
  │   └── en.toml                  # English string overrides (optional)
  ├── assets/                      # Logo, banners, favicon → copied to output root
  └── blog/
      ├── 2025-03-01-first-post.md # Post: date prefix orders, rest is the slug
      └── draft.md                 # No date prefix = skipped

The default locale is served at the site root, the other under /{code}/.

The submit commands run the contact, donation and admin forms through the
same validation and simulated gateway the pages describe.

Run 'almare gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the whole site into the output directory
    Build,
    /// Load config, translations and blog posts without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Validate and submit a form through the simulated gateway
    #[command(subcommand)]
    Submit(SubmitCommand),
}

/// Flags shared by every form submission.
#[derive(clap::Args, Clone)]
struct SubmitArgs {
    /// Language for validation and status messages
    #[arg(long, default_value = "es")]
    locale: Locale,

    /// Skip the simulated network delay
    #[arg(long)]
    instant: bool,
}

#[derive(Subcommand)]
enum SubmitCommand {
    /// Send a contact message
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
        /// Append analytics events to this JSON-lines file instead of stdout
        #[arg(long)]
        events: Option<PathBuf>,
        #[command(flatten)]
        args: SubmitArgs,
    },
    /// Make a donation
    Donation {
        /// Custom amount; overrides the default preset
        #[arg(long, conflicts_with = "preset")]
        amount: Option<String>,
        /// Press one of the configured preset buttons
        #[arg(long)]
        preset: Option<u32>,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long)]
        message: Option<String>,
        /// Append analytics events to this JSON-lines file instead of stdout
        #[arg(long)]
        events: Option<PathBuf>,
        #[command(flatten)]
        args: SubmitArgs,
    },
    /// Sign in to the admin panel
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long)]
        remember_me: bool,
        #[command(flatten)]
        args: SubmitArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::render_site(&site, &cli.source, &cli.output)?;
            output::print_build_output(&report, &site.blog.posts);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = Site::load(&cli.source)?;
            let missing = site.catalog.missing_keys();
            output::print_check_output(&site, &cli.source, &missing);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Submit(command) => {
            if !submit(&cli.source, command)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Run one form submission. `Ok(false)` when validation or the gateway failed.
fn submit(source: &Path, command: SubmitCommand) -> Result<bool, Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    let catalog = Catalog::load(source)?;
    let gateway_for = |args: &SubmitArgs| {
        if args.instant {
            SimulatedGateway::instant()
        } else {
            SimulatedGateway::from_config(&site_config.submission)
        }
    };

    match command {
        SubmitCommand::Contact {
            name,
            email,
            subject,
            message,
            events,
            args,
        } => {
            let common = catalog.translator(args.locale, "common");
            let t = catalog.translator(args.locale, "contact");
            let mut form = ContactForm::new();
            form.set("name", name);
            form.set("email", email);
            form.set("subject", subject);
            form.set("message", message);

            println!("==> {}", common.t("buttons.sending"));
            let sink = sink_for(events);
            let outcome = form.submit(&gateway_for(&args), sink.as_ref());
            let messages = SubmitMessages {
                errors: form.state().errors().localize(&common, &[]),
                success: t.t("form.success"),
                failure: common.t("submit.failed"),
            };
            output::print_submit_outcome(&outcome, &messages, |receipt| {
                reference_line(&common, receipt)
            });
            Ok(outcome.is_sent())
        }
        SubmitCommand::Donation {
            amount,
            preset,
            name,
            email,
            message,
            events,
            args,
        } => {
            let common = catalog.translator(args.locale, "common");
            let t = catalog.translator(args.locale, "donations");
            let symbol = site_config.donations.currency_symbol.as_str();
            let mut form = DonationForm::new(
                &site_config.donations.presets,
                site_config.donations.default_amount,
            );
            if let Some(preset) = preset {
                if !form.select_preset(preset) {
                    eprintln!("Unknown preset {preset}; keeping the default amount");
                }
            }
            if let Some(amount) = amount {
                form.set("amount", amount);
            }
            form.set("name", name);
            form.set("email", email);
            if let Some(message) = message {
                form.set("message", message);
            }

            let shown = form
                .amount()
                .map(format_amount)
                .unwrap_or_else(|| form.state().value("amount").to_string());
            let args_for = [("symbol", symbol), ("amount", shown.as_str())];
            println!("==> {}", t.t_args("form.submit", &args_for));
            let sink = sink_for(events);
            let outcome = form.submit(&gateway_for(&args), sink.as_ref());
            let messages = SubmitMessages {
                errors: form.state().errors().localize(&common, &[("symbol", symbol)]),
                success: t.t_args("form.success", &args_for),
                failure: common.t("submit.failed"),
            };
            output::print_submit_outcome(&outcome, &messages, |receipt| {
                reference_line(&common, receipt)
            });
            Ok(outcome.is_sent())
        }
        SubmitCommand::Login {
            email,
            password,
            remember_me,
            args,
        } => {
            let common = catalog.translator(args.locale, "common");
            let t = catalog.translator(args.locale, "admin");
            let mut form = LoginForm::new();
            form.set("email", email);
            form.set("password", password);
            form.set_remember_me(remember_me);

            println!("==> {}", t.t("submitting"));
            let outcome = form.submit(&gateway_for(&args));
            let messages = SubmitMessages {
                errors: form.state().errors().localize(&common, &[]),
                success: t.t("panel.title"),
                failure: t.t("unavailable"),
            };
            output::print_submit_outcome(&outcome, &messages, |session| {
                t.t_args("signedInAs", &[("email", session.email.as_str())])
            });
            Ok(outcome.is_sent())
        }
    }
}

fn reference_line(common: &Translator<'_>, receipt: &Receipt) -> String {
    common.t_args("submit.reference", &[("reference", receipt.reference.as_str())])
}

fn sink_for(events: Option<PathBuf>) -> Box<dyn AnalyticsSink> {
    match events {
        Some(path) => Box::new(JsonLinesSink::new(path)),
        None => Box::new(ConsoleSink),
    }
}
