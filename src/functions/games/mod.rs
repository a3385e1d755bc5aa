pub mod number_guess;
