mod cmds;
mod output;
mod sharedopts;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
