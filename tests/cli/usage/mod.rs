mod wrong_argument_count_contract;
