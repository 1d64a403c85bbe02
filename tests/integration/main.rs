mod helpers;
mod scrollback_flow;
mod typing_lifecycle;
