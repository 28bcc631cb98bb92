mod link_cycle;

pub use link_cycle::LinkCycle;
