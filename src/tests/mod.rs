mod card_tests;
mod carousel_tests;
