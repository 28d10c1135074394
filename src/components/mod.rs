// UI components

pub mod profile_view;

pub use profile_view::ProfileView;
