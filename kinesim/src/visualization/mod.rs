pub mod kinesim_vis2d;
