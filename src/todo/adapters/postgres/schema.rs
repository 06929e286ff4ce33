//! Diesel schema for to-do persistence.

diesel::table! {
    /// To-do records.
    todos (id) {
        /// Storage-allocated identifier.
        id -> Int8,
        /// Item title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional description.
        #[max_length = 1000]
        description -> Nullable<Varchar>,
        /// Completion flag.
        is_completed -> Bool,
        /// Priority between 1 and 5.
        priority -> Int2,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
    }
}
