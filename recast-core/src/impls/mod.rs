mod scalar;

mod vec;

mod array;

mod map;

mod pointer;

mod value;
