//! Interactive exploration session.
//!
//! Asks for a city (with confirmation), how to filter, and the month and/or
//! day; loads the data, prints the four reports and offers to start over.
//! All validation goes through the parsers in [`crate::filters`].

use super::input::Prompter;
use crate::config::ExplorerConfig;
use crate::error::Result;
use crate::filters::{
    FilterMode, describe_months, parse_city, parse_day, parse_filter_mode, parse_offered_month,
    parse_yes_no,
};
use crate::loader::DataLoader;
use crate::models::{City, DayFilter, FilterCriteria, MonthFilter};
use crate::report::{render_reports, separator};
use crate::stats::compute_reports;
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub struct Session<R, W> {
    config: ExplorerConfig,
    loader: DataLoader,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: ExplorerConfig, prompter: Prompter<R, W>) -> Self {
        let loader = DataLoader::new(&config);
        Self {
            config,
            loader,
            prompter,
        }
    }

    /// Run until the user declines to restart or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(criteria) = self.get_filters()? else {
                return Ok(());
            };

            self.explore(criteria)?;

            let restart = self
                .prompter
                .ask_until("\nWould you like to restart? Enter yes or no.", parse_yes_no)?;
            if restart != Some(true) {
                return Ok(());
            }
            self.prompter.say("")?;
        }
    }

    /// Load and report on one query; load failures are shown, not fatal
    fn explore(&mut self, criteria: FilterCriteria) -> Result<()> {
        info!(
            "Exploring {} for {} and {}",
            criteria.city, criteria.month, criteria.day
        );

        match self.loader.load_filtered(criteria) {
            Ok(dataset) => {
                let reports = compute_reports(&dataset);
                let text = render_reports(&reports, self.config.show_timing);
                self.prompter.say(&text)?;
            }
            Err(error) => {
                warn!("Failed to load {}: {}", criteria.city, error);
                self.prompter
                    .say(&format!("\nCould not load data for {}: {}\n", criteria.city, error))?;
            }
        }
        Ok(())
    }

    /// Ask for city, filter mode, month and day. `None` when input ends.
    pub fn get_filters(&mut self) -> Result<Option<FilterCriteria>> {
        self.prompter
            .say("Hello! Let's explore some US bikeshare data!\n")?;

        let Some(city) = self.get_city()? else {
            return Ok(None);
        };

        let Some(mode) = self.prompter.ask_until(
            "Would you like to filter by month, day, both, or none at all? Type \"none\" for no filters.",
            parse_filter_mode,
        )?
        else {
            return Ok(None);
        };

        let month = if mode.wants_month() {
            let offered = self.config.offered_months.clone();
            let prompt = format!(
                "Which month? The following months are available to filter: {}.",
                describe_months(&offered)
            );
            match self
                .prompter
                .ask_until(&prompt, |answer| parse_offered_month(answer, &offered))?
            {
                Some(month) => month,
                None => return Ok(None),
            }
        } else {
            MonthFilter::All
        };

        let day = if mode.wants_day() {
            match self.prompter.ask_until(
                "\nWhich day of the week? Please enter the full name of the day (e.g. Sunday, Monday, etc.).",
                parse_day,
            )? {
                Some(day) => day,
                None => return Ok(None),
            }
        } else {
            DayFilter::All
        };

        if mode == FilterMode::None {
            self.prompter.say(
                "You have chosen not to filter on anything. We will show you information for everything we have.\n",
            )?;
        }
        self.prompter.say(&separator())?;

        Ok(Some(FilterCriteria { city, month, day }))
    }

    fn get_city(&mut self) -> Result<Option<City>> {
        loop {
            let Some(city) = self.prompter.ask_until(
                "There are 3 cities that we can explore: Chicago, New York City, and Washington. Which city would you like to explore?",
                parse_city,
            )?
            else {
                return Ok(None);
            };

            let confirm = format!(
                "\nYou typed in \"{}\" as the city. Is that correct? Please type in yes or no.",
                city
            );
            match self.prompter.ask_until(&confirm, parse_yes_no)? {
                Some(true) => {
                    self.prompter.say(&format!(
                        "\n{} is a great city! We can now filter the information based on months and days of the week.\n",
                        city
                    ))?;
                    return Ok(Some(city));
                }
                Some(false) => self.prompter.say("\nLet's try again.")?,
                None => return Ok(None),
            }
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }
}
