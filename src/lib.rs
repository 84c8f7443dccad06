pub mod shared {
    pub mod http {
        pub mod api_error;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod use_cases {
            pub mod record_event {
                pub mod handler;
                pub mod latency;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
