use artcat::commands::import::ImportReport;
use artcat::commands::{CmdMessage, CodeEntry, MessageLevel};
use artcat::model::{Code, Record};
use colored::Colorize;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_records(records: &[(Code, Record)]) {
    for (i, (code, record)) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", code.to_string().yellow().bold());
        match record {
            Record::Art(r) => {
                if !r.name.is_empty() {
                    println!("  name:             {}", r.name.bold());
                }
                println!("  url:              {}", r.url);
                println!("  media:            {}", r.details.media);
                println!("  year:             {}", r.details.year);
                println!("  series:           {}", r.details.series);
                if !r.details.secondary_series.is_empty() {
                    println!("  secondary series: {}", r.details.secondary_series);
                }
                println!(
                    "  dimensions:       {} x {} cm ({})",
                    r.details.dimensions.length,
                    r.details.dimensions.width,
                    r.details.dimensions.size_category
                );
            }
            Record::Simple(r) => {
                println!("  url:  {}", r.url);
                println!("  info: {}", r.info);
            }
        }
    }
}

pub fn print_listing(entries: &[CodeEntry]) {
    for entry in entries {
        if entry.is_default {
            println!("{} {}", entry.code, "(default)".dimmed());
        } else {
            println!("{}", entry.code);
        }
    }
}

pub fn print_import_report(report: &ImportReport) {
    for outcome in &report.outcomes {
        println!("{}", outcome.to_string().yellow());
    }
}
