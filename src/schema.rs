table! {
    booking_steps (token) {
        token -> Char,
        name -> Varchar,
        email -> Varchar,
        phone -> Varchar,
        category -> Varchar,
        created_at -> Datetime,
    }
}

table! {
    entries (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        email -> Varchar,
        phone -> Varchar,
        category -> Varchar,
        reason -> Text,
        appointment_date -> Date,
        appointment_time -> Time,
        designated_attendee -> Varchar,
        document_url -> Nullable<Varchar>,
        status -> Varchar,
        reschedule_token -> Nullable<Varchar>,
        created_at -> Datetime,
        updated_at -> Datetime,
    }
}

table! {
    receptionists (id) {
        id -> Unsigned<Bigint>,
        username -> Varchar,
        password -> Char,
        is_approved -> Bool,
        created_at -> Datetime,
    }
}

table! {
    sessions (token) {
        token -> Char,
        role -> Varchar,
        username -> Varchar,
        login_time -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(booking_steps, entries, receptionists, sessions,);
