pub mod application {
    pub mod post {
        pub mod create;
        pub mod watch_feed;
    }
    pub mod session {
        pub mod authenticate;
        pub mod tracker;
    }
    pub mod tag_suggestion {
        pub mod suggest;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod subscription;
        pub mod value_objects;
    }
    pub mod post {
        pub mod errors;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod create;
            pub mod watch_feed;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod authenticate;
        }
    }
    pub mod tag_suggestion {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod suggest;
        }
    }
}
