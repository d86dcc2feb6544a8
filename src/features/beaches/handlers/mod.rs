pub mod beach_handler;

pub use beach_handler::{
    confirm_beach, get_beach, list_pending_beaches, search_beaches, submit_beach,
    PendingListingPage,
};
