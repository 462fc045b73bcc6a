//! Background store worker.
//!
//! Front ends that must stay responsive (an interactive shell, a UI event
//! loop) hand store work to an [`AllocationWorker`]. The worker owns the
//! `AllocationService` on a dedicated thread, runs requests in submission
//! order, and delivers each result through a [`Pending`] handle that the
//! caller can block on or poll.
//!
//! # Examples
//!
//! ```no_run
//! use hostel::worker::{AllocationWorker, Request, Response};
//! use hostel::DatabaseConfig;
//!
//! let worker = AllocationWorker::spawn(DatabaseConfig::new("/tmp/hostel.db")).unwrap();
//! let pending = worker.submit(Request::Allocate {
//!     student_name: "Asha".into(),
//!     room_number: "A1".into(),
//! });
//!
//! match pending.wait() {
//!     Ok(Response::Allocated(a)) => println!("allocated {}", a.room_number()),
//!     Ok(other) => println!("unexpected response: {other:?}"),
//!     Err(e) => eprintln!("allocation failed: {e}"),
//! }
//! ```

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::allocation::Allocation;
use crate::database::{Database, DatabaseConfig};
use crate::error::{Error, Result};
use crate::room::Room;
use crate::service::{AllocationService, RoomStore};

/// A unit of store work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Allocate a room to a student.
    Allocate {
        /// Student to allocate.
        student_name: String,
        /// Room to claim.
        room_number: String,
    },
    /// List rooms that are still available.
    AvailableRooms,
    /// List every room.
    AllRooms,
    /// List all allocations, most recent first.
    Allocations,
    /// List the allocations of one room, most recent first.
    RoomAllocations {
        /// Room whose allocations to list.
        room_number: String,
    },
    /// Look up one room.
    RoomStatus {
        /// Room to look up.
        room_number: String,
    },
    /// Register a new room.
    AddRoom {
        /// Number of the new room.
        room_number: String,
        /// Capacity of the new room.
        capacity: u32,
    },
}

/// The successful outcome of a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A new allocation was recorded.
    Allocated(Allocation),
    /// A room listing.
    Rooms(Vec<Room>),
    /// An allocation listing.
    Allocations(Vec<Allocation>),
    /// A single room.
    Room(Room),
}

struct Job {
    request: Request,
    reply: Sender<Result<Response>>,
}

/// Handle to the result of a submitted request.
#[derive(Debug)]
pub struct Pending {
    rx: Receiver<Result<Response>>,
}

impl Pending {
    /// Blocks until the worker has handled the request.
    ///
    /// # Errors
    ///
    /// Returns the request's own error, or `Error::WorkerStopped` if the
    /// worker exited before answering.
    pub fn wait(self) -> Result<Response> {
        self.rx.recv().unwrap_or(Err(Error::WorkerStopped))
    }

    /// Returns the result if it is ready, without blocking.
    #[must_use]
    pub fn try_take(&self) -> Option<Result<Response>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(Error::WorkerStopped)),
        }
    }
}

/// Runs allocation requests on a dedicated thread.
///
/// Dropping the worker closes its queue; requests already queued are still
/// answered before the thread is joined.
#[derive(Debug)]
pub struct AllocationWorker {
    tx: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl AllocationWorker {
    /// Spawns a worker that opens the database described by `config`.
    ///
    /// The database is opened on the worker thread. This call waits for the
    /// open to finish so that open failures surface here.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned or the database
    /// cannot be opened.
    pub fn spawn(config: DatabaseConfig) -> Result<Self> {
        Self::spawn_with(move || Database::open(config))
    }

    /// Spawns a worker over a store built by `open` on the worker thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned or `open` fails.
    pub fn spawn_with<S, F>(open: F) -> Result<Self>
    where
        S: RoomStore + 'static,
        F: FnOnce() -> Result<S> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Job>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<()>>();

        let handle = thread::Builder::new()
            .name("hostel-store".to_string())
            .spawn(move || {
                let mut service = match open() {
                    Ok(store) => {
                        let _ = ready_tx.send(Ok(()));
                        AllocationService::new(store)
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                run(&mut service, &rx);
                log::debug!("store worker exiting");
            })?;

        let worker = Self {
            tx: Some(tx),
            handle: Some(handle),
        };

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(worker),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(Error::WorkerStopped),
        }
    }

    /// Queues a request and returns a handle to its result.
    ///
    /// Requests run in submission order. If the worker has stopped, the
    /// returned handle yields `Error::WorkerStopped`.
    #[must_use]
    pub fn submit(&self, request: Request) -> Pending {
        let (reply, rx) = mpsc::channel();
        if let Some(tx) = &self.tx {
            // On failure the job, and with it the reply sender, is dropped
            let _ = tx.send(Job { request, reply });
        }
        Pending { rx }
    }

    /// Submits a request and waits for its result.
    ///
    /// # Errors
    ///
    /// See [`Pending::wait`].
    pub fn call(&self, request: Request) -> Result<Response> {
        self.submit(request).wait()
    }
}

impl Drop for AllocationWorker {
    fn drop(&mut self) {
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("store worker panicked");
            }
        }
    }
}

fn run<S: RoomStore>(service: &mut AllocationService<S>, rx: &Receiver<Job>) {
    for Job { request, reply } in rx {
        log::debug!("store worker handling {request:?}");
        let result = handle(service, request);
        // The caller may have dropped its Pending handle
        let _ = reply.send(result);
    }
}

fn handle<S: RoomStore>(service: &mut AllocationService<S>, request: Request) -> Result<Response> {
    match request {
        Request::Allocate {
            student_name,
            room_number,
        } => service
            .allocate_room(&student_name, &room_number)
            .map(Response::Allocated),
        Request::AvailableRooms => service.list_available_rooms().map(Response::Rooms),
        Request::AllRooms => service.list_rooms().map(Response::Rooms),
        Request::Allocations => service.list_allocations().map(Response::Allocations),
        Request::RoomAllocations { room_number } => service
            .list_allocations_for_room(&room_number)
            .map(Response::Allocations),
        Request::RoomStatus { room_number } => service.room(&room_number).map(Response::Room),
        Request::AddRoom {
            room_number,
            capacity,
        } => service.add_room(&room_number, capacity).map(Response::Room),
    }
}
