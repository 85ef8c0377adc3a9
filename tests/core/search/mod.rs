mod test_multilingual;
mod test_ranking;
