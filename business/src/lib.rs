pub mod application {
    pub mod connection {
        pub mod get_connection;
    }
}

pub mod domain {
    pub mod logger;
    pub mod access {
        pub mod current_user;
        pub mod role;
    }
    pub mod settings {
        pub mod model;
        pub mod source;
    }
    pub mod connection {
        pub mod connector;
        pub mod errors;
        pub mod use_cases {
            pub mod get_connection;
        }
    }
}
