pub(crate) mod server;

pub(crate) mod action {
    pub(crate) mod healthz;
    pub(crate) mod root;

    pub(crate) mod container {
        pub(crate) mod create;
    }
}

pub(crate) mod dto {
    pub(crate) mod container;
    pub(crate) mod user;
}
