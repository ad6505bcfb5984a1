mod canvas;

pub(crate) use canvas::Canvas;
