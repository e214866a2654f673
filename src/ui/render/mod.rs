mod all;
mod dialog;
mod footer;
mod grid;
mod layout;
mod log;
mod register;
mod toasts;
mod voting;

use self::log::log;
use super::widgets;
use super::Frame;
use dialog::vote_dialog;
use footer::footer;
use register::register;
use toasts::toasts;
use voting::voting;

pub use all::all as render;
