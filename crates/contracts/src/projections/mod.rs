pub mod p900_alphabet_histogram;
