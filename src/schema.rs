diesel::table! {
    items (id) {
        id -> Integer,
        title -> Text,
        description -> Nullable<Text>,
        owner_id -> Integer,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        email -> Text,
        name -> Text,
        is_active -> Bool,
    }
}

diesel::joinable!(items -> users (owner_id));

diesel::allow_tables_to_appear_in_same_query!(items, users,);
