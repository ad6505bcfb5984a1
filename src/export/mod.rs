mod gif;
mod quantize;

pub(crate) use gif::AnimationWriter;
