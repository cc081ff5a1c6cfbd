//! Text rendering of the statistics reports.
//!
//! Produces the console sentences shown to users. Each section is headed by
//! what is being calculated and closed by a dashed separator; a report that
//! failed renders its error in place of its body.

use crate::constants::SEPARATOR_WIDTH;
use crate::error::Result;
use crate::stats::{
    Availability, DurationReport, Reports, StationReport, TimeReport, Timed, UserReport,
};
use colored::*;
use std::collections::BTreeMap;
use std::time::Duration;

/// Dashed line closing every section
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn render_time_report(report: &TimeReport) -> Vec<String> {
    vec![
        format!("The most common month to travel was {}.", report.month_name()),
        format!(
            "The most common day of the week to travel was {}.",
            report.day_name()
        ),
        format!(
            "The most common start hour was {}.",
            report.start_hour_label()
        ),
    ]
}

pub fn render_station_report(report: &StationReport) -> Vec<String> {
    vec![
        format!(
            "The most commonly used start station was used {} times at \"{}\".",
            report.start.count, report.start.station
        ),
        format!(
            "The most commonly used end station was used {} times at \"{}\".",
            report.end.count, report.end.station
        ),
        format!(
            "The most frequent combination of start and end station trips was used {} times \
             with START STATION: \"{}\" and END STATION: \"{}\".",
            report.trip.count, report.trip.start_station, report.trip.end_station
        ),
    ]
}

pub fn render_duration_report(report: &DurationReport) -> Vec<String> {
    vec![
        format!(
            "The total travel time for all trips during this time period was {}.",
            report.total()
        ),
        format!(
            "The average travel time for all trips during this time period was {}.",
            report.mean()
        ),
    ]
}

pub fn render_user_report(report: &UserReport) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.user_types {
        Availability::Available(counts) => {
            lines.push(
                "These are the different types of users that used the bikeshare during this time period:"
                    .to_string(),
            );
            lines.extend(render_counts(counts));
        }
        Availability::NotAvailable(reason) => {
            lines.push(reason.to_string());
        }
    }

    match &report.genders {
        Availability::Available(counts) => {
            lines.push(
                "This shows the gender of users that used the bikeshare during this time period:"
                    .to_string(),
            );
            lines.extend(render_counts(counts));
        }
        Availability::NotAvailable(reason) => {
            lines.push(reason.to_string());
        }
    }

    match &report.birth_years {
        Availability::Available(years) => {
            lines.push(format!(
                "The earliest birth year from the list of users was {}.",
                years.earliest
            ));
            lines.push(format!(
                "The most recent birth year from the list of users was {}.",
                years.most_recent
            ));
            lines.push(format!(
                "The most common birth year from the list of users was {}.",
                years.most_common
            ));
        }
        Availability::NotAvailable(reason) => {
            lines.push(reason.to_string());
        }
    }

    lines
}

fn render_counts(counts: &BTreeMap<String, usize>) -> Vec<String> {
    let width = counts.keys().map(|key| key.len()).max().unwrap_or(0);
    counts
        .iter()
        .map(|(key, count)| format!("  {:<width$}  {}", key, count, width = width))
        .collect()
}

fn render_section<T>(
    heading: &str,
    result: &Result<Timed<T>>,
    body: impl Fn(&T) -> Vec<String>,
    show_timing: bool,
) -> String {
    let mut lines = vec![String::new(), heading.bright_yellow().to_string(), String::new()];

    match result {
        Ok(timed) => {
            lines.extend(body(&timed.value));
            if show_timing {
                lines.push(String::new());
                lines.push(timing_line(timed.elapsed));
            }
        }
        Err(error) => {
            lines.push(format!("{} {}", "Unable to compute:".bright_red(), error));
        }
    }

    lines.push(separator());
    lines.join("\n")
}

fn timing_line(elapsed: Duration) -> String {
    format!("This took {:.6} seconds.", elapsed.as_secs_f64())
        .bright_black()
        .to_string()
}

/// Render all four reports in display order
pub fn render_reports(reports: &Reports, show_timing: bool) -> String {
    let users: Result<Timed<UserReport>> = Ok(reports.users.clone());

    [
        render_section(
            "Calculating The Most Frequent Times of Travel...",
            &reports.time,
            render_time_report,
            show_timing,
        ),
        render_section(
            "Calculating The Most Popular Stations and Trip...",
            &reports.stations,
            render_station_report,
            show_timing,
        ),
        render_section(
            "Calculating Trip Duration...",
            &reports.duration,
            render_duration_report,
            show_timing,
        ),
        render_section(
            "Calculating User Stats...",
            &users,
            render_user_report,
            show_timing,
        ),
    ]
    .join("\n")
}
