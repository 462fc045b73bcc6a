//! Interactive shell.
//!
//! Input is read on its own thread and all store work is handed to an
//! [`AllocationWorker`], so the session keeps accepting commands (`help`,
//! `quit`, further requests) while earlier requests are still pending.
//! Replies are printed in submission order. Errors are reported and the
//! session continues.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use clap::Args;
use hostel::{AllocationWorker, OutputFormat, Pending, Request, Response};

use crate::error::CliError;
use crate::output::{write_allocations, write_rooms, RoomListing};
use crate::utils::{database_config, load_configuration, GlobalOptions};

const HELP: &str = "\
Commands:
  allocate <student> <room>   allocate a room (the last word is the room)
  rooms [all]                 list available rooms, or all rooms
  allocations [room]          list allocations, most recent first
  status <room>               show one room
  help                        show this help
  quit                        leave the shell";

/// How often pending replies are checked while waiting for input.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Start an interactive allocation session.
#[derive(Args)]
pub struct ShellCommand {}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellLine {
    /// A request for the worker.
    Request(Request),
    /// Print the help text.
    Help,
    /// End the session.
    Quit,
    /// Nothing to do.
    Empty,
}

/// Parse one line of shell input.
pub fn parse_line(line: &str) -> Result<ShellLine, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = words.split_first() else {
        return Ok(ShellLine::Empty);
    };

    match (command.to_lowercase().as_str(), args) {
        ("allocate", [student @ .., room]) if !student.is_empty() => {
            Ok(ShellLine::Request(Request::Allocate {
                student_name: student.join(" "),
                room_number: (*room).to_string(),
            }))
        }
        ("allocate", _) => Err("usage: allocate <student> <room>".to_string()),
        ("rooms", []) => Ok(ShellLine::Request(Request::AvailableRooms)),
        ("rooms", ["all"]) => Ok(ShellLine::Request(Request::AllRooms)),
        ("rooms", _) => Err("usage: rooms [all]".to_string()),
        ("allocations", []) => Ok(ShellLine::Request(Request::Allocations)),
        ("allocations", [room]) => Ok(ShellLine::Request(Request::RoomAllocations {
            room_number: (*room).to_string(),
        })),
        ("allocations", _) => Err("usage: allocations [room]".to_string()),
        ("status", [room]) => Ok(ShellLine::Request(Request::RoomStatus {
            room_number: (*room).to_string(),
        })),
        ("status", _) => Err("usage: status <room>".to_string()),
        ("help" | "?", _) => Ok(ShellLine::Help),
        ("quit" | "exit", _) => Ok(ShellLine::Quit),
        (other, _) => Err(format!("unknown command: {other} (type 'help')")),
    }
}

/// Forwards input lines over a channel; the channel closes at end of input.
fn spawn_reader<R>(input: R) -> io::Result<Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("hostel-input".to_string())
        .spawn(move || {
            for line in input.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        })?;
    Ok(rx)
}

struct InFlight {
    pending: Pending,
    listing: RoomListing,
}

struct Session<'a> {
    worker: &'a AllocationWorker,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    format: OutputFormat,
    in_flight: VecDeque<InFlight>,
}

impl Session<'_> {
    fn submit(&mut self, request: Request) {
        let listing = if request == Request::AllRooms {
            RoomListing::All
        } else {
            RoomListing::Available
        };
        let pending = self.worker.submit(request);
        self.in_flight.push_back(InFlight { pending, listing });
    }

    /// Prints the replies that have arrived, stopping at the first one
    /// still outstanding.
    fn render_ready(&mut self) -> Result<(), CliError> {
        while let Some(front) = self.in_flight.front() {
            let Some(result) = front.pending.try_take() else {
                break;
            };
            let listing = front.listing;
            self.in_flight.pop_front();
            self.render(result, listing)?;
        }
        Ok(())
    }

    /// Waits for and prints every outstanding reply.
    fn finish(&mut self) -> Result<(), CliError> {
        while let Some(InFlight { pending, listing }) = self.in_flight.pop_front() {
            self.render(pending.wait(), listing)?;
        }
        Ok(())
    }

    fn render(
        &mut self,
        result: hostel::Result<Response>,
        listing: RoomListing,
    ) -> Result<(), CliError> {
        match result {
            Ok(Response::Allocated(allocation)) => {
                writeln!(
                    self.out,
                    "Room {} successfully allocated to {}",
                    allocation.room_number(),
                    allocation.student_name()
                )?;
                // The refreshed log is printed before any later reply
                let pending = self.worker.submit(Request::Allocations);
                self.in_flight.push_front(InFlight {
                    pending,
                    listing: RoomListing::Available,
                });
            }
            Ok(Response::Rooms(rooms)) => write_rooms(self.out, &rooms, listing, self.format)?,
            Ok(Response::Room(room)) => {
                write_rooms(self.out, &[room], RoomListing::All, self.format)?;
            }
            Ok(Response::Allocations(all)) => write_allocations(self.out, &all, self.format)?,
            Err(e) => writeln!(self.err, "Error: {e}")?,
        }
        Ok(())
    }
}

/// Run a session until `quit` or end of input.
///
/// Results go to `out`, errors to `err`. Requests still pending when the
/// session ends are answered before returning. Only I/O failures on the
/// session streams end the session early.
pub fn run_session<R>(
    input: R,
    out: &mut dyn Write,
    err: &mut dyn Write,
    worker: &AllocationWorker,
    format: OutputFormat,
    prompt: bool,
) -> Result<(), CliError>
where
    R: BufRead + Send + 'static,
{
    let lines = spawn_reader(input)?;
    let mut session = Session {
        worker,
        out,
        err,
        format,
        in_flight: VecDeque::new(),
    };

    loop {
        session.render_ready()?;

        let next = if session.in_flight.is_empty() {
            if prompt {
                write!(session.out, "hostel> ")?;
                session.out.flush()?;
            }
            lines.recv().ok()
        } else {
            match lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => Some(line),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => None,
            }
        };

        let Some(line) = next else {
            break;
        };

        match parse_line(&line?) {
            Ok(ShellLine::Request(request)) => session.submit(request),
            Ok(ShellLine::Help) => writeln!(session.out, "{HELP}")?,
            Ok(ShellLine::Quit) => break,
            Ok(ShellLine::Empty) => {}
            Err(message) => writeln!(session.err, "Error: {message}")?,
        }
    }

    session.finish()
}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let worker = AllocationWorker::spawn(database_config(global, &config)?)?;

        let prompt = io::stdin().is_terminal() && !global.quiet;
        if prompt {
            println!("Hostel room allocation shell. Type 'help' for commands.");
        }

        // Unlocked handles: the worker thread logs to stderr while requests
        // are pending.
        run_session(
            BufReader::new(io::stdin()),
            &mut io::stdout(),
            &mut io::stderr(),
            &worker,
            config.output_format(),
            prompt,
        )
    }
}
