/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub mod backdrop;
pub mod detail;
pub mod fetch;
pub mod listing;
pub mod movie;
pub mod mvi;
pub mod query;
pub mod render;
pub mod search;
pub mod theme;
pub mod view;

pub use listing::ListingController;
pub use movie::DetailController;
pub use search::{SearchController, SearchEvent};
