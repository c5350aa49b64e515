/// Per-frame loop bookkeeping: fixed-step animation and stop control.
pub mod render_loop;
