// Relaunch Module
//
// 托盘“打开”动作的决策：复用现有窗口，还是整进程重启

pub mod policy;

pub use policy::{Reactivation, RelaunchPolicy, FRESHNESS_WINDOW_MINUTES};
