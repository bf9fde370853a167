//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered teams, keyed by their unique name.
    teams (name) {
        /// Primary key: unique team name.
        name -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Global user records with their team binding and activity flag.
    users (id) {
        /// Primary key: caller-supplied opaque identifier.
        id -> Text,
        /// Human-readable display name.
        username -> Text,
        /// Name of the owning team.
        team_name -> Text,
        /// Position within the team roster; reviewer selection walks this
        /// order.
        team_position -> Int4,
        /// Whether the user is eligible for review assignment.
        active -> Bool,
    }
}

diesel::table! {
    /// Pull request records with their reviewer assignments.
    pull_requests (id) {
        /// Primary key: caller-supplied opaque identifier.
        id -> Text,
        /// Human-readable title.
        name -> Text,
        /// Author's user id.
        author_id -> Text,
        /// Assigned reviewer ids in assignment order.
        reviewers -> Array<Text>,
        /// Lifecycle state: OPEN or MERGED.
        status -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Merge timestamp; set exactly when the status is MERGED.
        merged_at -> Nullable<Timestamptz>,
    }
}

diesel::joinable!(users -> teams (team_name));

diesel::allow_tables_to_appear_in_same_query!(teams, users, pull_requests);
