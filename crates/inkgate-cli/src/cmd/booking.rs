use crate::output::{print_json, print_table};
use clap::Subcommand;
use inkgate_core::{
    booking::BookingRequest,
    types::{ProposalStatus, RequestStatus},
};
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum BookingSubcommand {
    /// List all booking requests
    List,
    /// Show one booking request with its status history
    Show { id: String },
    /// Move a booking request to a new status
    Status {
        id: String,
        /// Target status, e.g. in_review, scheduled, declined
        status: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Attach a proposal and mark the request proposed
    Propose {
        id: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Advance the proposal lifecycle: sent, accepted, declined, expired
    Proposal { id: String, status: String },
}

pub fn run(root: &Path, subcommand: BookingSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        BookingSubcommand::List => {
            let bookings = BookingRequest::list(root)?;
            if json {
                print_json(&bookings)?;
            } else if bookings.is_empty() {
                println!("No booking requests.");
            } else {
                let rows = bookings
                    .iter()
                    .map(|b| {
                        vec![
                            b.id.to_string(),
                            b.client_name.clone(),
                            b.artist.clone().unwrap_or_else(|| "-".to_string()),
                            b.status.to_string(),
                        ]
                    })
                    .collect();
                print_table(&["ID", "CLIENT", "ARTIST", "STATUS"], rows);
            }
            Ok(())
        }
        BookingSubcommand::Show { id } => {
            let booking = BookingRequest::load(root, &id)?;
            if json {
                print_json(&booking)?;
            } else {
                println!("Booking:  {}", booking.id);
                println!("Client:   {}", booking.client_name);
                if let Some(ref artist) = booking.artist {
                    println!("Artist:   {artist}");
                }
                if let Some(ref idea) = booking.idea {
                    println!("Idea:     {idea}");
                }
                println!("Status:   {}", booking.status);
                if let Some(ref proposal) = booking.proposal {
                    println!("Proposal: {}", proposal.status);
                }
                println!("History:");
                for change in &booking.status_history {
                    let note = change
                        .note
                        .as_deref()
                        .map(|n| format!(" — {n}"))
                        .unwrap_or_default();
                    println!("  {} → {}{}", change.at.to_rfc3339(), change.to, note);
                }
            }
            Ok(())
        }
        BookingSubcommand::Status { id, status, note } => {
            let target: RequestStatus = status.parse()?;
            let mut booking = BookingRequest::load(root, &id)?;
            booking.set_status(target, note)?;
            booking.save(root)?;
            if json {
                print_json(&booking)?;
            } else {
                println!("booking {} is now {}", booking.id, booking.status);
            }
            Ok(())
        }
        BookingSubcommand::Propose { id, note } => {
            let mut booking = BookingRequest::load(root, &id)?;
            booking.propose(note)?;
            booking.save(root)?;
            if json {
                print_json(&booking)?;
            } else {
                println!("proposal drafted for booking {}", booking.id);
            }
            Ok(())
        }
        BookingSubcommand::Proposal { id, status } => {
            let target: ProposalStatus = status.parse()?;
            let mut booking = BookingRequest::load(root, &id)?;
            booking.update_proposal(target)?;
            booking.save(root)?;
            if json {
                print_json(&booking)?;
            } else {
                println!("proposal on booking {} is now {}", booking.id, target);
            }
            Ok(())
        }
    }
}
