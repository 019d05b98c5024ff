pub mod application {
    pub mod review {
        pub mod generate;
    }
}

pub mod domain {
    pub mod logger;
    pub mod review {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
